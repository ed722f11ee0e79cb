//! Query interfaces for the purchasing-power SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`CoinworthSdk`](crate::CoinworthSdk) and exposes one resolver of the
//! request pipeline: currency validation and USD quotes, or product price
//! lookup with the random catalog fallback.

pub mod currencies;
pub mod products;

pub use currencies::CurrencyQuery;
pub use products::ProductQuery;
