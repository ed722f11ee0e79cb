//! Live-network smoke test for the coinworth SDK.
//!
//! Hits the real CryptoCompare API with the default source wiring.
//!
//! Run with:
//! ```sh
//! cargo test -- --ignored --nocapture
//! ```

use coinworth_sdk::CoinworthSdk;

#[test]
#[ignore]
fn live_quotes_and_catalog_answer() {
    let sdk = CoinworthSdk::builder().build();

    // Latest quotes for every supported currency
    for symbol in ["BTC", "LTC", "ETH"] {
        let quote = sdk.currencies().value(symbol).unwrap();
        eprintln!("{} = {} USD", symbol, quote.usd);
        assert!(quote.usd > 0.0);
    }

    // Historical quote
    let quote = sdk.currencies().value_at("BTC", 1_439_337_600).unwrap();
    eprintln!("BTC on 2015-08-12 = {} USD", quote.usd);
    assert!(quote.usd > 0.0);

    // Full answer against a random catalog product
    let response = sdk.respond_to([("currency", "BTC")]);
    eprintln!("{}", serde_json::to_string_pretty(&response).unwrap());
    assert!(response.is_ok());

    // Full historical answer
    let response = sdk.respond_to([("currency", "BTC"), ("date", "2017-11-12")]);
    eprintln!("{}", serde_json::to_string_pretty(&response).unwrap());
    assert!(response.is_ok());
}
