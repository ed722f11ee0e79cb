use crate::config;

#[derive(Debug, thiserror::Error)]
pub enum CoinworthError {
    #[error("This endpoint only supports the following cryptocurrencies: {0}")]
    UnsupportedCurrency(String),

    #[error("Please input a date with format YYYY-MM-dd")]
    InvalidDateFormat,

    #[error("Date cannot be in the future.")]
    FutureDate,

    #[error("There was an error getting the currency value.")]
    CurrencySourceUnavailable,

    #[error("The price for the given product could not be found.")]
    ProductNotFound,

    #[error("An error occured while getting the product price. Please try again.")]
    ProductPriceUnparseable,

    #[error("The product price must be greater than zero.")]
    InvalidProductPrice,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoinworthError {
    /// `UnsupportedCurrency` carrying the supported set, e.g.
    /// "This endpoint only supports the following cryptocurrencies: BTC, LTC, ETH".
    pub fn unsupported_currency() -> Self {
        CoinworthError::UnsupportedCurrency(config::SUPPORTED_CURRENCIES.join(", "))
    }
}

pub type Result<T> = std::result::Result<T, CoinworthError>;
