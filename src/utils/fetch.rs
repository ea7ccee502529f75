use std::collections::HashMap;

use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Serialize};

pub struct RequestParams<'a, S: Serialize> {
    pub url: String,
    pub method: Method,
    pub body: Option<S>,
    pub query_args: Option<HashMap<&'a str, &'a str>>,
}

pub async fn send_http_request<T: DeserializeOwned>(
    http: &Client,
    params: RequestParams<'_, impl Serialize>,
) -> eyre::Result<T> {
    let mut request = http.request(params.method, &params.url);

    if let Some(query_args) = &params.query_args {
        request = request.query(query_args);
    }

    if let Some(body) = &params.body {
        request = request.json(body);
    }

    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        eyre::bail!("Request to `{}` failed with status {}", params.url, status);
    }

    let response_body = response.json::<T>().await?;

    Ok(response_body)
}
