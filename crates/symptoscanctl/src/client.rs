//! HTTP client for the symptoscand proxy.

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::time::Duration;
use symptoscan_common::ApiReply;

/// Default proxy address
pub const DEFAULT_SERVER: &str = "http://localhost:5500";

pub struct ProxyClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET /api/symptoms?q=<raw>
    pub async fn symptoms(&self, raw: &str) -> Result<ApiReply> {
        let url = format!("{}/api/symptoms", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("q", raw)])
            .send()
            .await
            .map_err(|e| anyhow!("Cannot reach symptoscand at {}: {}", self.base_url, e))?;

        // 400 replies still carry a JSON error body
        let body: Value = response
            .json()
            .await
            .context("Invalid JSON from symptoscand")?;

        Ok(ApiReply::from_json(&body))
    }
}
