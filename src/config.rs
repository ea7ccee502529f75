use serde::Deserialize;

const CONFIG_FILE_PATH: &str = "data/config.toml";

#[derive(Deserialize, Clone)]
pub struct Config {
    #[serde(rename = "LEDGER_API_URL")]
    pub ledger_api_url: String,
    #[serde(rename = "FACTORY_ACCOUNT")]
    pub factory_account: String,
    #[serde(rename = "TOKEN_SYMBOL")]
    pub token_symbol: String,
    #[serde(rename = "TOKEN_DECIMALS")]
    pub token_decimals: u32,
}

impl Config {
    pub async fn read_default() -> Self {
        let cfg_str = tokio::fs::read_to_string(CONFIG_FILE_PATH)
            .await
            .expect("Default config to be present");

        toml::from_str(&cfg_str).expect("Default config to be valid")
    }
}
