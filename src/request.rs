//! Inbound parameter capture and request classification.
//!
//! The HTTP layer (or any other caller) hands the SDK a plain string
//! key-value mapping. [`RequestParams`] keeps the recognized keys and
//! drops everything else; [`RequestParams::classify`] derives which of the
//! five request shapes the mapping spells out.

// ---------------------------------------------------------------------------
// RequestShape
// ---------------------------------------------------------------------------

/// Which combination of recognized parameters a request carries.
///
/// `currency` is necessary for every shape other than
/// [`ParamsNotProvided`](RequestShape::ParamsNotProvided); `date` and
/// `amz_product_id` independently select the other three variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestShape {
    Currency,
    CurrencyDate,
    CurrencyProduct,
    CurrencyDateProduct,
    ParamsNotProvided,
}

impl RequestShape {
    /// True for shapes that carry a historical date.
    pub fn has_date(self) -> bool {
        matches!(self, RequestShape::CurrencyDate | RequestShape::CurrencyDateProduct)
    }

    /// True for shapes that name a specific product.
    pub fn has_product(self) -> bool {
        matches!(self, RequestShape::CurrencyProduct | RequestShape::CurrencyDateProduct)
    }
}

// ---------------------------------------------------------------------------
// RequestParams
// ---------------------------------------------------------------------------

/// The recognized request parameters: `currency`, `date`, `amz_product_id`.
///
/// Built once per request from the caller's key-value mapping; unrecognized
/// keys are dropped at construction and never influence classification.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    currency: Option<String>,
    date: Option<String>,
    product_id: Option<String>,
}

impl RequestParams {
    /// Capture the recognized keys from any string key-value pair iterator.
    ///
    /// Later duplicates of a key overwrite earlier ones, matching the
    /// last-wins behavior of a query-string multimap flattened to a map.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = RequestParams::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "currency" => params.currency = Some(value.into()),
                "date" => params.date = Some(value.into()),
                "amz_product_id" => params.product_id = Some(value.into()),
                _ => {}
            }
        }
        params
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }

    /// Classify the parameter set into a [`RequestShape`].
    ///
    /// Total and deterministic; evaluated most-specific first.
    pub fn classify(&self) -> RequestShape {
        match (
            self.currency.is_some(),
            self.date.is_some(),
            self.product_id.is_some(),
        ) {
            (true, true, true) => RequestShape::CurrencyDateProduct,
            (true, true, false) => RequestShape::CurrencyDate,
            (true, false, true) => RequestShape::CurrencyProduct,
            (true, false, false) => RequestShape::Currency,
            (false, _, _) => RequestShape::ParamsNotProvided,
        }
    }
}
