//! Product price lookup with the random catalog fallback.

use crate::error::Result;
use crate::models::ProductQuote;

// ---------------------------------------------------------------------------
// ProductQuery
// ---------------------------------------------------------------------------

/// Query interface for product prices, backed by the SDK's injected
/// [`ProductPriceSource`](crate::sources::ProductPriceSource) and fallback
/// [`Catalog`](crate::sources::Catalog).
pub struct ProductQuery<'a> {
    sdk: &'a crate::CoinworthSdk,
}

impl<'a> ProductQuery<'a> {
    /// Create a new `ProductQuery` bound to the given SDK.
    pub fn new(sdk: &'a crate::CoinworthSdk) -> Self {
        Self { sdk }
    }

    /// Resolve a price: by identifier when one is given, otherwise a
    /// random catalog product.
    pub fn resolve(&self, asin: Option<&str>) -> Result<ProductQuote> {
        match asin {
            Some(id) => self.by_asin(id),
            None => Ok(self.random()),
        }
    }

    /// Price of the product identified by `asin`, via the injected source.
    pub fn by_asin(&self, asin: &str) -> Result<ProductQuote> {
        let price = self.sdk.product_source.price(asin)?;
        Ok(ProductQuote {
            asin: asin.to_string(),
            price,
        })
    }

    /// One catalog product, picked uniformly with the SDK's RNG.
    /// This path cannot fail.
    pub fn random(&self) -> ProductQuote {
        let mut rng = self.sdk.rng.borrow_mut();
        self.sdk.catalog.pick(&mut *rng)
    }
}
