use std::{fs, io::Write, path::Path};

fn main() {
    let data_path = Path::new("./data");
    let linkdrop_keys_path = data_path.join("linkdrop_keys.txt");
    let config_path = data_path.join("config.toml");

    if !data_path.exists() {
        fs::create_dir_all(data_path).unwrap();
    }

    if !linkdrop_keys_path.exists() {
        fs::File::create(&linkdrop_keys_path).unwrap();
    }

    if !config_path.exists() {
        let mut config_file = fs::File::create(&config_path).unwrap();
        let config_content = r#"LEDGER_API_URL = ""   # drop ledger base url
FACTORY_ACCOUNT = ""  # event factory account
TOKEN_SYMBOL = "SOV"  # conference token symbol
TOKEN_DECIMALS = 18   # conference token decimals
"#;
        config_file.write_all(config_content.as_bytes()).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
}
