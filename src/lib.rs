//! Purchasing-power SDK for cryptocurrencies.
//!
//! Answers one question: given a cryptocurrency, and optionally a
//! historical date and/or a specific retail product, how many units of
//! that product could be purchased with one unit of the currency?
//!
//! The SDK classifies a plain key-value parameter set into one of five
//! request shapes, validates and converts each parameter, fetches the two
//! price figures from injectable sources, and composes a uniform
//! JSON-shaped success or error response.
//!
//! # Quick start
//!
//! ```no_run
//! use coinworth_sdk::{CoinworthSdk, RequestParams};
//!
//! let sdk = CoinworthSdk::builder().build();
//!
//! let params = RequestParams::from_pairs([("currency", "BTC"), ("date", "2017-11-12")]);
//! let response = sdk.respond(&params);
//!
//! println!("{}", serde_json::to_string(&response).unwrap());
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod compare;
pub mod config;
pub mod date;
pub mod error;
pub mod models;
pub mod queries;
pub mod request;
pub mod sources;

#[cfg(feature = "async")]
pub use async_client::AsyncCoinworthSdk;
pub use compare::compare;
pub use error::{CoinworthError, Result};
pub use models::{Comparison, PriceQuote, ProductQuote, Response, ResponseData, Units};
pub use request::{RequestParams, RequestShape};
pub use sources::{Catalog, CurrencyPriceSource, ProductPriceSource};

use std::cell::RefCell;
use std::fmt;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use sources::{AmazonScraper, CryptoCompare};

// ---------------------------------------------------------------------------
// CoinworthSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CoinworthSdk`] instance.
///
/// Use [`CoinworthSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CoinworthSdkBuilder::build) to create the
/// SDK.
pub struct CoinworthSdkBuilder {
    timeout: Duration,
    currency_source: Option<Box<dyn CurrencyPriceSource>>,
    product_source: Option<Box<dyn ProductPriceSource>>,
    catalog: Option<Catalog>,
    seed: Option<u64>,
}

impl Default for CoinworthSdkBuilder {
    fn default() -> Self {
        Self {
            timeout: config::DEFAULT_TIMEOUT,
            currency_source: None,
            product_source: None,
            catalog: None,
            seed: None,
        }
    }
}

impl CoinworthSdkBuilder {
    /// Set the HTTP request timeout for the default price sources.
    ///
    /// Defaults to 30 seconds. Has no effect on injected sources.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Inject a currency price source in place of the CryptoCompare
    /// default. Lets the pipeline run without network access in tests.
    pub fn currency_source<S>(mut self, source: S) -> Self
    where
        S: CurrencyPriceSource + 'static,
    {
        self.currency_source = Some(Box::new(source));
        self
    }

    /// Inject a product price source in place of the Amazon scrape default.
    pub fn product_source<S>(mut self, source: S) -> Self
    where
        S: ProductPriceSource + 'static,
    {
        self.product_source = Some(Box::new(source));
        self
    }

    /// Replace the built-in fallback product catalog.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Seed the RNG used for random catalog picks, making product
    /// selection deterministic. Defaults to an entropy seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the SDK, wiring defaults for anything not injected.
    pub fn build(self) -> CoinworthSdk {
        let timeout = self.timeout;
        CoinworthSdk {
            currency_source: self
                .currency_source
                .unwrap_or_else(|| Box::new(CryptoCompare::new(timeout))),
            product_source: self
                .product_source
                .unwrap_or_else(|| Box::new(AmazonScraper::new(timeout))),
            catalog: self.catalog.unwrap_or_default(),
            rng: RefCell::new(match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// CoinworthSdk
// ---------------------------------------------------------------------------

/// The main entry point for the purchasing-power SDK.
///
/// Owns the injected price sources, the fallback catalog, and the RNG used
/// for random catalog picks, and exposes domain query interfaces as
/// lightweight borrowing wrappers plus the full request pipeline
/// ([`respond()`](CoinworthSdk::respond)).
///
/// Created via [`CoinworthSdk::builder()`].
pub struct CoinworthSdk {
    pub(crate) currency_source: Box<dyn CurrencyPriceSource>,
    pub(crate) product_source: Box<dyn ProductPriceSource>,
    pub(crate) catalog: Catalog,
    pub(crate) rng: RefCell<StdRng>,
}

impl CoinworthSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> CoinworthSdkBuilder {
        CoinworthSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the currency query interface.
    ///
    /// Returns a lightweight wrapper that borrows from the SDK and
    /// provides currency validation and USD quote lookup.
    pub fn currencies(&self) -> queries::currencies::CurrencyQuery<'_> {
        queries::currencies::CurrencyQuery::new(self)
    }

    /// Access the product query interface.
    pub fn products(&self) -> queries::products::ProductQuery<'_> {
        queries::products::ProductQuery::new(self)
    }

    // -- Request pipeline --------------------------------------------------

    /// Answer a request.
    ///
    /// Classifies the parameter set, runs the resolvers the shape calls
    /// for, and composes the success, error, or guidance response. Never
    /// fails: every pipeline error becomes the error response shape with
    /// the failure's message as `msg`.
    pub fn respond(&self, params: &RequestParams) -> Response {
        let shape = params.classify();
        if shape == RequestShape::ParamsNotProvided {
            return Response::guidance();
        }

        match self.answer(params, shape) {
            Ok(data) => Response::ok(data),
            Err(e) => Response::error(e.to_string()),
        }
    }

    /// Convenience wrapper: build the [`RequestParams`] from raw pairs and
    /// answer them.
    pub fn respond_to<I, K, V>(&self, pairs: I) -> Response
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.respond(&RequestParams::from_pairs(pairs))
    }

    /// Run the resolver subsequence for a shape, short-circuiting on the
    /// first failure: currency membership, then date, then the two price
    /// lookups, then the comparison.
    fn answer(&self, params: &RequestParams, shape: RequestShape) -> Result<ResponseData> {
        let symbol = self.currencies().resolve(params)?;

        let timestamp = if shape.has_date() {
            Some(date::parse_date(params.date().unwrap_or_default())?)
        } else {
            None
        };

        let quote = match timestamp {
            Some(ts) => self.currencies().value_at(&symbol, ts)?,
            None => self.currencies().value(&symbol)?,
        };

        let product = if shape.has_product() {
            self.products().by_asin(params.product_id().unwrap_or_default())?
        } else {
            self.products().random()
        };

        let outcome = compare::compare(&symbol, quote.usd, product.price, timestamp)?;

        Ok(ResponseData {
            product_url: config::product_url(&product.asin),
            amz_product_id: product.asin,
            product_price: product.price,
            units: outcome.units,
            change: outcome.change,
            msg: outcome.msg,
            currency_value: quote.usd,
        })
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CoinworthSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CoinworthSdk(currencies=[{}], catalog={} products)",
            config::SUPPORTED_CURRENCIES.join(", "),
            self.catalog.len()
        )
    }
}
