//! Live cryptocurrency quotes from the CryptoCompare min-api.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config;
use crate::error::{CoinworthError, Result};
use crate::sources::CurrencyPriceSource;

/// Currency price source backed by the CryptoCompare REST API.
///
/// `GET {base}/price?fsym={sym}&tsyms=USD` for the latest quote and
/// `GET {base}/pricehistorical?fsym={sym}&tsyms=USD&ts={ts}` for a
/// historical one.
pub struct CryptoCompare {
    client: Client,
    base: String,
}

impl CryptoCompare {
    /// Create a source against the public CryptoCompare endpoint.
    pub fn new(timeout: Duration) -> Self {
        Self::with_base(config::PRICE_API_BASE, timeout)
    }

    /// Create a source against a custom base URL (test servers, proxies).
    pub fn with_base(base: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            base: base.into(),
        }
    }

    fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
        let resp = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                eprintln!("Currency price request failed: {}", e);
                CoinworthError::CurrencySourceUnavailable
            })?;

        resp.json().map_err(|e| {
            eprintln!("Currency price payload was not JSON: {}", e);
            CoinworthError::CurrencySourceUnavailable
        })
    }
}

impl CurrencyPriceSource for CryptoCompare {
    fn latest_usd(&self, symbol: &str) -> Result<f64> {
        let url = format!("{}/price?fsym={}&tsyms=USD", self.base, symbol);
        let data = self.fetch_json(&url)?;

        // Expected shape: {"USD": 7540.35}
        data.get("USD").and_then(|v| v.as_f64()).ok_or_else(|| {
            eprintln!("No USD quote for {} in payload: {}", symbol, data);
            CoinworthError::CurrencySourceUnavailable
        })
    }

    fn usd_at(&self, symbol: &str, timestamp: i64) -> Result<f64> {
        let url = format!(
            "{}/pricehistorical?fsym={}&tsyms=USD&ts={}",
            self.base, symbol, timestamp
        );
        let data = self.fetch_json(&url)?;

        // Expected shape: {"BTC": {"USD": 263.44}}
        data.get(symbol)
            .and_then(|v| v.get("USD"))
            .and_then(|v| v.as_f64())
            .ok_or_else(|| {
                eprintln!(
                    "No historical USD quote for {} at {} in payload: {}",
                    symbol, timestamp, data
                );
                CoinworthError::CurrencySourceUnavailable
            })
    }
}
