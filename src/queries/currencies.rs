//! Currency validation and USD quote lookup.

use crate::config;
use crate::error::{CoinworthError, Result};
use crate::models::PriceQuote;
use crate::request::RequestParams;

// ---------------------------------------------------------------------------
// CurrencyQuery
// ---------------------------------------------------------------------------

/// Query interface for cryptocurrency USD values, backed by the SDK's
/// injected [`CurrencyPriceSource`](crate::sources::CurrencyPriceSource).
pub struct CurrencyQuery<'a> {
    sdk: &'a crate::CoinworthSdk,
}

impl<'a> CurrencyQuery<'a> {
    /// Create a new `CurrencyQuery` bound to the given SDK.
    pub fn new(sdk: &'a crate::CoinworthSdk) -> Self {
        Self { sdk }
    }

    /// Validate the `currency` request parameter.
    ///
    /// Ok iff the parameter is present and a case-sensitive member of the
    /// supported set; the error message names that set.
    pub fn resolve(&self, params: &RequestParams) -> Result<String> {
        match params.currency() {
            Some(symbol) if config::is_supported_currency(symbol) => Ok(symbol.to_string()),
            _ => Err(CoinworthError::unsupported_currency()),
        }
    }

    /// Latest USD value of one unit of `symbol`.
    pub fn value(&self, symbol: &str) -> Result<PriceQuote> {
        self.quote(symbol, None)
    }

    /// USD value of one unit of `symbol` as of `timestamp`.
    pub fn value_at(&self, symbol: &str, timestamp: i64) -> Result<PriceQuote> {
        self.quote(symbol, Some(timestamp))
    }

    /// Membership is re-checked here so direct quote calls fail the same
    /// way the request path does, before any network traffic.
    fn quote(&self, symbol: &str, timestamp: Option<i64>) -> Result<PriceQuote> {
        if !config::is_supported_currency(symbol) {
            return Err(CoinworthError::unsupported_currency());
        }

        let usd = match timestamp {
            Some(ts) => self.sdk.currency_source.usd_at(symbol, ts)?,
            None => self.sdk.currency_source.latest_usd(symbol)?,
        };

        Ok(PriceQuote {
            symbol: symbol.to_string(),
            usd,
            timestamp,
        })
    }
}
