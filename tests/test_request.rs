//! Request classification tests: the five shapes, key recognition, and
//! determinism.

use std::collections::HashMap;

use coinworth_sdk::{RequestParams, RequestShape};

// ---------------------------------------------------------------------------
// classify
// ---------------------------------------------------------------------------

#[test]
fn no_params_classifies_as_params_not_provided() {
    let params = RequestParams::from_pairs::<_, &str, String>([]);
    assert_eq!(params.classify(), RequestShape::ParamsNotProvided);
}

#[test]
fn currency_only_classifies_as_currency() {
    let params = RequestParams::from_pairs([("currency", "BTC")]);
    assert_eq!(params.classify(), RequestShape::Currency);
}

#[test]
fn currency_and_date_classifies_as_currency_date() {
    let params = RequestParams::from_pairs([("currency", "BTC"), ("date", "2015-08-12")]);
    assert_eq!(params.classify(), RequestShape::CurrencyDate);
}

#[test]
fn currency_and_product_classifies_as_currency_product() {
    let params = RequestParams::from_pairs([("currency", "BTC"), ("amz_product_id", "B01MQWUXZS")]);
    assert_eq!(params.classify(), RequestShape::CurrencyProduct);
}

#[test]
fn all_three_classify_as_currency_date_product() {
    let params = RequestParams::from_pairs([
        ("currency", "BTC"),
        ("date", "2015-08-12"),
        ("amz_product_id", "B01MQWUXZS"),
    ]);
    assert_eq!(params.classify(), RequestShape::CurrencyDateProduct);
}

#[test]
fn missing_currency_wins_over_other_keys() {
    let params = RequestParams::from_pairs([("date", "2015-08-12"), ("amz_product_id", "B01MQWUXZS")]);
    assert_eq!(params.classify(), RequestShape::ParamsNotProvided);
}

#[test]
fn unrecognized_keys_are_ignored() {
    let params = RequestParams::from_pairs([
        ("currency", "BTC"),
        ("utm_source", "newsletter"),
        ("page", "2"),
    ]);
    assert_eq!(params.classify(), RequestShape::Currency);
    assert_eq!(params.currency(), Some("BTC"));
    assert_eq!(params.date(), None);
    assert_eq!(params.product_id(), None);
}

#[test]
fn classification_is_deterministic() {
    let map = HashMap::from([
        ("currency".to_string(), "ETH".to_string()),
        ("date".to_string(), "2016-01-01".to_string()),
    ]);

    let first = RequestParams::from_pairs(map.clone()).classify();
    for _ in 0..10 {
        assert_eq!(RequestParams::from_pairs(map.clone()).classify(), first);
    }
    assert_eq!(first, RequestShape::CurrencyDate);
}

// ---------------------------------------------------------------------------
// shape helpers
// ---------------------------------------------------------------------------

#[test]
fn shape_flags_match_variants() {
    assert!(!RequestShape::Currency.has_date());
    assert!(!RequestShape::Currency.has_product());
    assert!(RequestShape::CurrencyDate.has_date());
    assert!(!RequestShape::CurrencyDate.has_product());
    assert!(!RequestShape::CurrencyProduct.has_date());
    assert!(RequestShape::CurrencyProduct.has_product());
    assert!(RequestShape::CurrencyDateProduct.has_date());
    assert!(RequestShape::CurrencyDateProduct.has_product());
}

#[test]
fn duplicate_keys_keep_the_last_value() {
    let params = RequestParams::from_pairs([("currency", "BTC"), ("currency", "LTC")]);
    assert_eq!(params.currency(), Some("LTC"));
}
