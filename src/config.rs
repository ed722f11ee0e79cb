use std::collections::HashMap;
use std::time::Duration;

/// Cryptocurrencies the SDK answers questions about. Case-sensitive.
pub const SUPPORTED_CURRENCIES: [&str; 3] = ["BTC", "LTC", "ETH"];

pub const PRICE_API_BASE: &str = "https://min-api.cryptocompare.com/data";
pub const PRODUCT_URL_BASE: &str = "https://www.amazon.com/gp/product/";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Guidance returned when a request carries no recognized parameters.
pub const GUIDANCE_MSG: &str = "The only parameter required is currency. Ex(currency=BTC)";

pub fn is_supported_currency(symbol: &str) -> bool {
    SUPPORTED_CURRENCIES.contains(&symbol)
}

/// Fallback products used when a request names no `amz_product_id`.
/// ASIN -> USD price.
pub fn fallback_products() -> HashMap<&'static str, f64> {
    HashMap::from([
        ("B01MQWUXZS", 159.99),
        ("B00EMKLSSM", 94.75),
        ("B06XDP7B71", 9.99),
        ("B01LMHI37Q", 689.00),
        ("B01J24C0TI", 229.99),
    ])
}

/// Public product page URL for an ASIN.
pub fn product_url(asin: &str) -> String {
    format!("{}{}", PRODUCT_URL_BASE, asin)
}
