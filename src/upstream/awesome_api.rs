//! AwesomeAPI exchange-rate adapter
//!
//! Calls `GET {base_url}/json/last/USD-BRL`. The payload nests the quote under
//! a `USDBRL` key and transmits every numeric field as a string, so the bid
//! price needs a string-to-float conversion during deserialization.

use crate::error::{AppError, Result};
use crate::upstream::RateProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use tracing::debug;

/// Deserialize a value that could be either a string or a float
fn deserialize_string_or_float<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrFloat {
        String(String),
        Float(f64),
    }

    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(s) => s.parse().map_err(serde::de::Error::custom),
        StringOrFloat::Float(f) => Ok(f),
    }
}

/// Upstream payload: `{"USDBRL": {...}}`
#[derive(Debug, Deserialize)]
struct UsdBrlResponse {
    #[serde(rename = "USDBRL")]
    usdbrl: UsdBrlQuote,
}

/// The nested quote. Only `bid` is consumed; the remaining fields document
/// the upstream contract and are dropped after mapping.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct UsdBrlQuote {
    code: Option<String>,
    codein: Option<String>,
    name: Option<String>,
    high: Option<String>,
    low: Option<String>,
    #[serde(rename = "varBid")]
    var_bid: Option<String>,
    #[serde(rename = "pctChange")]
    pct_change: Option<String>,
    #[serde(deserialize_with = "deserialize_string_or_float")]
    bid: f64,
    ask: Option<String>,
    timestamp: Option<String>,
    create_date: Option<String>,
}

/// AwesomeAPI HTTP client
pub struct AwesomeApiClient {
    base_url: String,
    client: Client,
}

impl AwesomeApiClient {
    /// Create a client whose requests are bounded by `timeout`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }
}

#[async_trait]
impl RateProvider for AwesomeApiClient {
    async fn fetch_usd_brl_bid(&self) -> Result<f64> {
        let url = format!("{}/json/last/USD-BRL", self.base_url);
        debug!("Requesting USD/BRL rate from {}", url);

        let body = self.client.get(&url).send().await?.text().await?;

        let data: UsdBrlResponse =
            serde_json::from_str(&body).map_err(AppError::Decode)?;

        debug!("USD/BRL bid = {}", data.usdbrl.bid);
        Ok(data.usdbrl.bid)
    }
}
