//! Fallback product catalog with uniform random selection.

use rand::prelude::*;

use crate::config;
use crate::models::ProductQuote;

/// Fixed set of products drawn from when a request names no
/// `amz_product_id`.
///
/// Entries are kept in ASIN order so a seeded RNG always walks the same
/// sequence of picks.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<ProductQuote>,
}

impl Catalog {
    /// The built-in five-product catalog from [`config::fallback_products`].
    pub fn builtin() -> Self {
        let entries = config::fallback_products()
            .into_iter()
            .map(|(asin, price)| ProductQuote {
                asin: asin.to_string(),
                price,
            })
            .collect();
        Self::new(entries)
    }

    /// A catalog over custom entries. Must not be empty: the random
    /// product path is the one resolver path that cannot fail.
    pub fn new(mut entries: Vec<ProductQuote>) -> Self {
        assert!(!entries.is_empty(), "catalog must contain at least one product");
        entries.sort_by(|a, b| a.asin.cmp(&b.asin));
        Self { entries }
    }

    pub fn entries(&self) -> &[ProductQuote] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick one entry uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> ProductQuote {
        self.entries
            .choose(rng)
            .cloned()
            .expect("catalog must contain at least one product")
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
