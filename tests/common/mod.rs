//! Shared test fixtures for the coinworth-sdk integration tests.
//!
//! Provides mock price sources so the full request pipeline can run
//! without network access, plus a seeded SDK constructor wired to them.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use coinworth_sdk::{
    CoinworthError, CoinworthSdk, CurrencyPriceSource, ProductPriceSource, Result,
};

// ---------------------------------------------------------------------------
// Currency sources
// ---------------------------------------------------------------------------

/// Currency source returning fixed USD values.
pub struct StaticCurrencySource {
    pub latest: f64,
    pub historical: f64,
}

impl CurrencyPriceSource for StaticCurrencySource {
    fn latest_usd(&self, _symbol: &str) -> Result<f64> {
        Ok(self.latest)
    }

    fn usd_at(&self, _symbol: &str, _timestamp: i64) -> Result<f64> {
        Ok(self.historical)
    }
}

/// Currency source that fails every call, like an unreachable API.
pub struct FailingCurrencySource;

impl CurrencyPriceSource for FailingCurrencySource {
    fn latest_usd(&self, _symbol: &str) -> Result<f64> {
        Err(CoinworthError::CurrencySourceUnavailable)
    }

    fn usd_at(&self, _symbol: &str, _timestamp: i64) -> Result<f64> {
        Err(CoinworthError::CurrencySourceUnavailable)
    }
}

/// Currency source that counts which endpoint was hit. The counters are
/// shared so tests can inspect them after the source moves into the SDK.
pub struct RecordingCurrencySource {
    pub usd: f64,
    pub latest_calls: Arc<AtomicUsize>,
    pub historical_calls: Arc<AtomicUsize>,
}

impl RecordingCurrencySource {
    pub fn new(usd: f64) -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let latest = Arc::new(AtomicUsize::new(0));
        let historical = Arc::new(AtomicUsize::new(0));
        (
            Self {
                usd,
                latest_calls: latest.clone(),
                historical_calls: historical.clone(),
            },
            latest,
            historical,
        )
    }
}

impl CurrencyPriceSource for RecordingCurrencySource {
    fn latest_usd(&self, _symbol: &str) -> Result<f64> {
        self.latest_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.usd)
    }

    fn usd_at(&self, _symbol: &str, _timestamp: i64) -> Result<f64> {
        self.historical_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.usd)
    }
}

// ---------------------------------------------------------------------------
// Product sources
// ---------------------------------------------------------------------------

/// Product source backed by a fixed ASIN -> price table.
pub struct TableProductSource {
    prices: HashMap<String, f64>,
}

impl TableProductSource {
    pub fn new(pairs: &[(&str, f64)]) -> Self {
        Self {
            prices: pairs
                .iter()
                .map(|(asin, price)| (asin.to_string(), *price))
                .collect(),
        }
    }
}

impl ProductPriceSource for TableProductSource {
    fn price(&self, asin: &str) -> Result<f64> {
        self.prices
            .get(asin)
            .copied()
            .ok_or(CoinworthError::ProductNotFound)
    }
}

/// Product source that finds a price but cannot parse it.
pub struct UnparseableProductSource;

impl ProductPriceSource for UnparseableProductSource {
    fn price(&self, _asin: &str) -> Result<f64> {
        Err(CoinworthError::ProductPriceUnparseable)
    }
}

// ---------------------------------------------------------------------------
// SDK constructors
// ---------------------------------------------------------------------------

/// SDK with fixed currency values, a small product table, and a seeded RNG.
pub fn sample_sdk(latest: f64, historical: f64) -> CoinworthSdk {
    CoinworthSdk::builder()
        .currency_source(StaticCurrencySource { latest, historical })
        .product_source(TableProductSource::new(&[
            ("B01MQWUXZS", 119.99),
            ("B06XDP7B71", 9.99),
        ]))
        .seed(7)
        .build()
}
