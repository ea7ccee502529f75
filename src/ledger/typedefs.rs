use serde::Serialize;

#[derive(Serialize)]
pub struct RecoverRequest {
    #[serde(rename = "secretKey")]
    secret_key: String,
}

impl RecoverRequest {
    pub fn new(secret_key: &str) -> Self {
        Self {
            secret_key: secret_key.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct ClaimRequest {
    #[serde(rename = "accountId")]
    account_id: String,
    #[serde(rename = "scavengerId", skip_serializing_if = "Option::is_none")]
    scavenger_id: Option<String>,
}

impl ClaimRequest {
    pub fn new(account_id: &str, scavenger_id: Option<&str>) -> Self {
        Self {
            account_id: account_id.to_string(),
            scavenger_id: scavenger_id.map(str::to_string),
        }
    }
}

#[derive(Serialize)]
pub struct TransferRequest {
    #[serde(rename = "senderId")]
    sender_id: String,
    #[serde(rename = "receiverId")]
    receiver_id: String,
    /// Raw integer amount in base units.
    amount: String,
}

impl TransferRequest {
    pub fn new(sender_id: &str, receiver_id: &str, amount: &str) -> Self {
        Self {
            sender_id: sender_id.to_string(),
            receiver_id: receiver_id.to_string(),
            amount: amount.to_string(),
        }
    }
}
