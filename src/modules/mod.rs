mod scanner;
mod wallet;

use crate::{config::Config, db::database::Database, ledger::api::LedgerClient};

use dialoguer::{theme::ColorfulTheme, Select};
use scanner::scan_codes;
use wallet::{send_tokens, show_wallet};

const LOGO: &str = r#"
 _                                   _
| | __ _ _ __  _   _  __ _ _ __ __| |
| |/ _` | '_ \| | | |/ _` | '__/ _` |
| | (_| | | | | |_| | (_| | | | (_| |
|_|\__,_|_| |_|\__, |\__,_|_|  \__,_|
               |___/
"#;

pub async fn menu() -> eyre::Result<()> {
    let config = Config::read_default().await;
    let ledger = LedgerClient::new(&config);

    println!("{LOGO}");

    loop {
        let options = vec![
            "Generate attendee database",
            "Scan check-in codes",
            "Show wallet",
            "Send tokens",
            "Exit",
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Choice:")
            .items(&options)
            .default(0)
            .interact()
            .unwrap();

        match selection {
            0 => {
                let _ = Database::new(&ledger).await?;
                tracing::info!("Attendee database successfully generated")
            }
            1 => {
                let db = Database::read().await;
                scan_codes(&db, &config, &ledger).await?;
            }
            2 => {
                let db = Database::read().await;
                show_wallet(db, &config, &ledger).await?;
            }
            3 => {
                let db = Database::read().await;
                send_tokens(&db, &config, &ledger).await?;
            }
            4 => {
                return Ok(());
            }
            _ => tracing::error!("Invalid selection"),
        }
    }
}

fn select_account_index(db: &Database) -> eyre::Result<usize> {
    let labels = db
        .accounts()
        .iter()
        .map(|account| format!("{} ({})", account.get_account_id(), account.get_balance()))
        .collect::<Vec<_>>();

    if labels.is_empty() {
        eyre::bail!("Attendee database is empty. Generate it first");
    }

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Attendee:")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(index)
}
