use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Account {
    secret_key: String,
    account_id: String,
    balance: f64,
}

impl Account {
    pub fn new(secret_key: &str, account_id: &str) -> Self {
        Self {
            secret_key: secret_key.to_string(),
            account_id: account_id.to_string(),
            ..Default::default()
        }
    }

    pub fn get_account_id(&self) -> &str {
        &self.account_id
    }

    pub fn get_balance(&self) -> f64 {
        self.balance
    }

    pub fn set_balance(&mut self, balance: f64) {
        self.balance = balance
    }
}
