use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PriceQuote — Resolved USD value of one unit of a cryptocurrency
// ---------------------------------------------------------------------------

/// USD value of one unit of a cryptocurrency, either the latest quote
/// (`timestamp: None`) or the value at a historical point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceQuote {
    pub symbol: String,
    pub usd: f64,
    pub timestamp: Option<i64>,
}

// ---------------------------------------------------------------------------
// ProductQuote — Resolved retail price of a product
// ---------------------------------------------------------------------------

/// Retail price of a product, keyed by the ASIN it was resolved for
/// (caller-supplied or picked from the fallback catalog).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductQuote {
    pub asin: String,
    pub price: f64,
}
