//! Async wrapper around [`CoinworthSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP sources do their work.
//!
//! # Example
//!
//! ```no_run
//! use coinworth_sdk::AsyncCoinworthSdk;
//!
//! async fn answer() -> coinworth_sdk::Result<()> {
//!     let sdk = AsyncCoinworthSdk::builder().build().await?;
//!
//!     let response = sdk.respond([("currency", "BTC")]).await?;
//!     println!("{}", serde_json::to_string(&response).unwrap());
//!     Ok(())
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{CoinworthError, Result};
use crate::models::Response;
use crate::request::RequestParams;
use crate::sources::{Catalog, CurrencyPriceSource, ProductPriceSource};
use crate::CoinworthSdk;

// ---------------------------------------------------------------------------
// AsyncCoinworthSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCoinworthSdk`] instance.
#[derive(Default)]
pub struct AsyncCoinworthSdkBuilder {
    inner: crate::CoinworthSdkBuilder,
}

impl AsyncCoinworthSdkBuilder {
    /// Set the HTTP request timeout for the default price sources.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Inject a currency price source in place of the CryptoCompare default.
    pub fn currency_source<S>(mut self, source: S) -> Self
    where
        S: CurrencyPriceSource + 'static,
    {
        self.inner = self.inner.currency_source(source);
        self
    }

    /// Inject a product price source in place of the Amazon scrape default.
    pub fn product_source<S>(mut self, source: S) -> Self
    where
        S: ProductPriceSource + 'static,
    {
        self.inner = self.inner.product_source(source);
        self
    }

    /// Replace the built-in fallback product catalog.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.inner = self.inner.catalog(catalog);
        self
    }

    /// Seed the RNG used for random catalog picks.
    pub fn seed(mut self, seed: u64) -> Self {
        self.inner = self.inner.seed(seed);
        self
    }

    /// Build the async SDK. Construction runs on the blocking thread pool
    /// so it won't block the async event loop.
    pub async fn build(self) -> Result<AsyncCoinworthSdk> {
        tokio::task::spawn_blocking(move || {
            let sdk = self.inner.build();
            Ok(AsyncCoinworthSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| CoinworthError::Internal(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCoinworthSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`CoinworthSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`CoinworthSdk`] is
/// protected by a [`Mutex`] since it uses `RefCell` internally.
pub struct AsyncCoinworthSdk {
    inner: Arc<Mutex<CoinworthSdk>>,
}

impl AsyncCoinworthSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncCoinworthSdkBuilder {
        AsyncCoinworthSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&CoinworthSdk` reference and should return
    /// a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CoinworthSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| CoinworthError::Internal("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| CoinworthError::Internal(format!("Task join error: {e}")))?
    }

    /// Answer a request asynchronously.
    ///
    /// Convenience wrapper around [`run()`](Self::run) for
    /// [`CoinworthSdk::respond_to()`].
    pub async fn respond<I, K, V>(&self, pairs: I) -> Result<Response>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let params = RequestParams::from_pairs(pairs);
        self.run(move |s| Ok(s.respond(&params))).await
    }
}
