use serde::Serialize;

// ---------------------------------------------------------------------------
// Units — Whole product count or affordable fraction
// ---------------------------------------------------------------------------

/// How many units of the product one coin buys.
///
/// `Whole` when the coin covers at least one unit (serializes as an
/// integer), `Partial` when it covers only a fraction of one (serializes
/// as a float, rounded to 2 decimal places).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Units {
    Whole(u64),
    Partial(f64),
}

// ---------------------------------------------------------------------------
// Comparison — Purchasing-power comparison result
// ---------------------------------------------------------------------------

/// Result of comparing a coin's USD value against a product price.
///
/// `change` is the leftover USD value after buying the maximum whole
/// number of units; zero when not even one unit is affordable.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub units: Units,
    pub change: f64,
    pub msg: String,
}
