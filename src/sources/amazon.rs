//! Product prices scraped from Amazon product pages.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header;

use crate::config;
use crate::error::{CoinworthError, Result};
use crate::sources::ProductPriceSource;

/// Markers preceding the price text on a product page, tried in order.
/// `priceblock_*` are the classic detail-page price spans; `a-offscreen`
/// is the screen-reader copy of the price in the newer layout.
const PRICE_MARKERS: [&str; 3] = ["priceblock_ourprice", "priceblock_dealprice", "a-offscreen"];

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Product price source that fetches `https://www.amazon.com/gp/product/{asin}`
/// and extracts the first price fragment from the returned HTML.
pub struct AmazonScraper {
    client: Client,
}

impl AmazonScraper {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }
}

impl ProductPriceSource for AmazonScraper {
    fn price(&self, asin: &str) -> Result<f64> {
        let url = config::product_url(asin);

        let resp = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                eprintln!("Product page request failed for {}: {}", asin, e);
                CoinworthError::ProductNotFound
            })?;

        let html = resp.text().map_err(|e| {
            eprintln!("Could not read product page for {}: {}", asin, e);
            CoinworthError::ProductNotFound
        })?;

        let fragment = extract_price_fragment(&html).ok_or_else(|| {
            eprintln!("No price fragment on product page for {}", asin);
            CoinworthError::ProductNotFound
        })?;

        parse_price(fragment)
    }
}

// ---------------------------------------------------------------------------
// HTML price extraction
// ---------------------------------------------------------------------------

/// Locate the price text on a product page.
///
/// Scans for the known price markers and returns the text between the
/// marker element's closing `>` and the next `<`. Returns `None` when no
/// marker yields non-empty text.
pub fn extract_price_fragment(html: &str) -> Option<&str> {
    for marker in PRICE_MARKERS {
        let Some(at) = html.find(marker) else {
            continue;
        };
        let rest = &html[at..];
        let Some(gt) = rest.find('>') else {
            continue;
        };
        let after = &rest[gt + 1..];
        let end = after.find('<').unwrap_or(after.len());
        let text = after[..end].trim();
        if !text.is_empty() {
            return Some(text);
        }
    }
    None
}

/// Parse a scraped price fragment like `$1,689.00` or `US$ 9.99` into a float.
pub fn parse_price(fragment: &str) -> Result<f64> {
    let cleaned: String = fragment
        .trim()
        .trim_start_matches("US")
        .trim_start_matches('$')
        .trim()
        .replace(',', "");

    cleaned.parse::<f64>().map_err(|e| {
        eprintln!("Unparseable price fragment {:?}: {}", fragment, e);
        CoinworthError::ProductPriceUnparseable
    })
}
