use serde::Deserialize;

#[derive(Deserialize)]
pub struct RecoveredAccount {
    #[serde(rename = "accountId")]
    pub account_id: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct NftMetadata {
    pub name: String,
    pub media: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DropInfo {
    #[serde(rename = "dropId")]
    pub drop_id: String,
    pub name: String,
    /// Raw fungible amount attached to each claim, if the drop carries tokens.
    #[serde(rename = "tokenAmount")]
    pub token_amount: Option<String>,
    pub nft: Option<NftMetadata>,
    /// Present only for scavenger hunts: the full set of piece ids required.
    #[serde(rename = "scavengerIds")]
    pub scavenger_ids: Option<Vec<String>>,
}

#[derive(Deserialize, Debug)]
pub struct ClaimHistory {
    pub claimed: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct ClaimReceipt {
    #[serde(rename = "tokenAmount")]
    pub token_amount: Option<String>,
    pub nft: Option<NftMetadata>,
}

#[derive(Deserialize)]
pub struct TokenBalance {
    pub amount: String,
}

#[derive(Deserialize, Debug)]
pub struct ClaimedDrop {
    #[serde(rename = "dropId")]
    pub drop_id: String,
    pub name: String,
    pub kind: String,
}
