use std::{
    collections::HashMap,
    sync::Mutex,
    time::{Duration, Instant},
};

use reqwest::Method;

use crate::{
    config::Config,
    utils::fetch::{send_http_request, RequestParams},
};

use super::{
    schemas::{
        ClaimHistory, ClaimReceipt, ClaimedDrop, DropInfo, RecoveredAccount, TokenBalance,
    },
    typedefs::{ClaimRequest, RecoverRequest, TransferRequest},
};

/// How long a fetched drop description stays valid. Claim history is never
/// cached: the ledger is the arbiter of claim uniqueness.
const DROP_INFO_TTL: Duration = Duration::from_secs(60);

/// Client for the event's drop ledger. Constructed once per run and passed by
/// reference; all remote claim state lives on the ledger side.
pub struct LedgerClient {
    http: reqwest::Client,
    base_url: String,
    factory_account: String,
    drop_cache: Mutex<HashMap<String, (Instant, DropInfo)>>,
}

impl LedgerClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.ledger_api_url.trim_end_matches('/').to_string(),
            factory_account: config.factory_account.clone(),
            drop_cache: Mutex::new(HashMap::new()),
        }
    }

    pub async fn recover_account(&self, secret_key: &str) -> eyre::Result<String> {
        let request_params = RequestParams {
            url: format!("{}/v1/keys/recover", self.base_url),
            method: Method::POST,
            body: Some(RecoverRequest::new(secret_key)),
            query_args: None,
        };

        let response_body =
            send_http_request::<RecoveredAccount>(&self.http, request_params).await?;

        Ok(response_body.account_id)
    }

    pub async fn token_balance(&self, account_id: &str) -> eyre::Result<String> {
        let query_args = [("factory", self.factory_account.as_str())]
            .into_iter()
            .collect();

        let request_params = RequestParams {
            url: format!("{}/v1/accounts/{}/balance", self.base_url, account_id),
            method: Method::GET,
            body: None::<serde_json::Value>,
            query_args: Some(query_args),
        };

        let response_body = send_http_request::<TokenBalance>(&self.http, request_params).await?;

        Ok(response_body.amount)
    }

    /// Drop descriptions are immutable for the duration of an event, so they
    /// are served from a TTL cache. Expired entries are evicted on read.
    pub async fn drop_info(&self, drop_id: &str) -> eyre::Result<DropInfo> {
        {
            let mut cache = self.drop_cache.lock().expect("Drop cache lock poisoned");

            match cache.get(drop_id) {
                Some((fetched_at, info)) if fetched_at.elapsed() < DROP_INFO_TTL => {
                    return Ok(info.clone());
                }
                Some(_) => {
                    cache.remove(drop_id);
                }
                None => {}
            }
        }

        let request_params = RequestParams {
            url: format!("{}/v1/drops/{}", self.base_url, drop_id),
            method: Method::GET,
            body: None::<serde_json::Value>,
            query_args: None,
        };

        let info = send_http_request::<DropInfo>(&self.http, request_params).await?;

        self.drop_cache
            .lock()
            .expect("Drop cache lock poisoned")
            .insert(drop_id.to_string(), (Instant::now(), info.clone()));

        Ok(info)
    }

    /// Fetched fresh on every scan; an id in this list makes the matching
    /// claim a no-op.
    pub async fn claims_for(&self, account_id: &str, drop_id: &str) -> eyre::Result<Vec<String>> {
        let query_args = [("accountId", account_id)].into_iter().collect();

        let request_params = RequestParams {
            url: format!("{}/v1/drops/{}/claims", self.base_url, drop_id),
            method: Method::GET,
            body: None::<serde_json::Value>,
            query_args: Some(query_args),
        };

        let response_body = send_http_request::<ClaimHistory>(&self.http, request_params).await?;

        Ok(response_body.claimed)
    }

    pub async fn claim_drop(
        &self,
        account_id: &str,
        drop_id: &str,
        scavenger_id: Option<&str>,
    ) -> eyre::Result<ClaimReceipt> {
        let request_params = RequestParams {
            url: format!("{}/v1/drops/{}/claim", self.base_url, drop_id),
            method: Method::POST,
            body: Some(ClaimRequest::new(account_id, scavenger_id)),
            query_args: None,
        };

        let receipt = send_http_request::<ClaimReceipt>(&self.http, request_params).await?;

        Ok(receipt)
    }

    pub async fn claimed_drops(&self, account_id: &str) -> eyre::Result<Vec<ClaimedDrop>> {
        let request_params = RequestParams {
            url: format!("{}/v1/accounts/{}/drops", self.base_url, account_id),
            method: Method::GET,
            body: None::<serde_json::Value>,
            query_args: None,
        };

        let response_body =
            send_http_request::<Vec<ClaimedDrop>>(&self.http, request_params).await?;

        Ok(response_body)
    }

    pub async fn transfer_tokens(
        &self,
        sender_id: &str,
        receiver_id: &str,
        amount: &str,
    ) -> eyre::Result<()> {
        let request_params = RequestParams {
            url: format!("{}/v1/transfers", self.base_url),
            method: Method::POST,
            body: Some(TransferRequest::new(sender_id, receiver_id, amount)),
            query_args: None,
        };

        send_http_request::<serde_json::Value>(&self.http, request_params).await?;

        Ok(())
    }
}
