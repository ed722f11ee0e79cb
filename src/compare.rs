//! Purchasing-power comparator.
//!
//! The one piece of real arithmetic in the crate: given a coin's USD value
//! and a product price, work out how many units of the product one coin
//! buys, the leftover change, and a human-readable explanation. Pure and
//! deterministic; all external lookups happen before this point.

use crate::date;
use crate::error::{CoinworthError, Result};
use crate::models::{Comparison, Units};

/// Compare one unit of `symbol` (worth `currency_value` USD, optionally as
/// of `timestamp`) against a product costing `product_price` USD.
///
/// A non-positive product price is rejected rather than divided by.
/// The timestamp only affects message phrasing: present tense for a live
/// quote, past tense dated with the timestamp's calendar day otherwise.
pub fn compare(
    symbol: &str,
    currency_value: f64,
    product_price: f64,
    timestamp: Option<i64>,
) -> Result<Comparison> {
    if product_price <= 0.0 {
        return Err(CoinworthError::InvalidProductPrice);
    }

    if currency_value == 0.0 {
        return Ok(Comparison {
            units: Units::Whole(0),
            change: 0.0,
            msg: format!("At this point in time {} was worth nothing.", symbol),
        });
    }

    let on_date = timestamp.and_then(date::calendar_date);
    let ratio = currency_value / product_price;

    if currency_value >= product_price {
        let units = ratio.floor() as u64;
        let change = round_to(currency_value - units as f64 * product_price, 2);
        let msg = match on_date {
            Some(day) => format!(
                "You could have bought {} units of the product with 1 {} on {}.",
                units, symbol, day
            ),
            None => format!("You can buy {} units of the product with 1 {}.", units, symbol),
        };
        Ok(Comparison {
            units: Units::Whole(units),
            change,
            msg,
        })
    } else {
        let needed = round_to(1.0 / ratio, 10);
        let msg = match on_date {
            Some(day) => format!(
                "You would have needed {} {} to buy one unit of the product on {}.",
                needed, symbol, day
            ),
            None => format!("You need {} {} to buy one unit of the product.", needed, symbol),
        };
        Ok(Comparison {
            units: Units::Partial(round_to(ratio, 2)),
            change: 0.0,
            msg,
        })
    }
}

/// Round half away from zero to `places` decimal places.
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
