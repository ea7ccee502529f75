use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::ledger::api::LedgerClient;

use super::account::Account;

const DB_FILE_PATH: &str = "data/accounts.json";
const LINKDROP_KEYS_FILE_PATH: &str = "data/linkdrop_keys.txt";

#[derive(Serialize, Deserialize, Default)]
pub struct Database(pub Vec<Account>);

impl Database {
    /// Builds the attendee database from `data/linkdrop_keys.txt`: each line
    /// is a linkdrop secret, resolved to its account id via the ledger's key
    /// recovery call.
    pub async fn new(ledger: &LedgerClient) -> eyre::Result<Self> {
        let keys_str = tokio::fs::read_to_string(LINKDROP_KEYS_FILE_PATH).await?;
        let secret_keys = keys_str
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();

        if secret_keys.is_empty() {
            eyre::bail!("No linkdrop secrets found in `{}`", LINKDROP_KEYS_FILE_PATH);
        }

        let progress = ProgressBar::new(secret_keys.len() as u64).with_style(
            ProgressStyle::with_template("Recovering accounts {bar:40} {pos}/{len}")
                .expect("Progress template to be valid"),
        );

        let mut accounts = Vec::with_capacity(secret_keys.len());

        for secret_key in secret_keys {
            let account_id = ledger.recover_account(secret_key).await?;
            accounts.push(Account::new(secret_key, &account_id));
            progress.inc(1);
        }

        progress.finish_and_clear();

        let db = Self(accounts);
        db.update();

        Ok(db)
    }

    pub async fn read() -> Self {
        let db_str = tokio::fs::read_to_string(DB_FILE_PATH)
            .await
            .expect("Database to be present. Generate it first");

        serde_json::from_str(&db_str).expect("Database to be valid")
    }

    pub fn update(&self) {
        let db_str = serde_json::to_string_pretty(&self).expect("Database to be serializable");
        std::fs::write(DB_FILE_PATH, db_str).expect("Database file to be writable");
    }

    pub fn accounts(&self) -> &[Account] {
        &self.0
    }

    pub fn accounts_mut(&mut self) -> &mut [Account] {
        &mut self.0
    }
}
