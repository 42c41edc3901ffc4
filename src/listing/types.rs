use serde::{Deserialize, Serialize};

/// Price as the retrieval service reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    /// Already-numeric amount in the marketplace currency.
    Amount(u64),
    /// Any other JSON number, e.g. `1500.0`. Only whole non-negative values normalize.
    Number(f64),
    /// Formatted text such as `"12,345"` or `" 8000 "`.
    Text(String),
}

impl RawPrice {
    /// Returns the value as it would be shown in an error message.
    pub fn display_value(&self) -> String {
        match self {
            RawPrice::Amount(amount) => amount.to_string(),
            RawPrice::Number(value) => value.to_string(),
            RawPrice::Text(text) => text.clone(),
        }
    }
}

impl From<u64> for RawPrice {
    fn from(amount: u64) -> Self {
        RawPrice::Amount(amount)
    }
}

impl From<f64> for RawPrice {
    fn from(value: f64) -> Self {
        RawPrice::Number(value)
    }
}

impl From<&str> for RawPrice {
    fn from(text: &str) -> Self {
        RawPrice::Text(text.to_string())
    }
}

/// One listing record from the retrieval service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    /// Native-language title.
    pub title: String,
    pub price: RawPrice,
    /// Marketplace condition label, e.g. `新品、未使用`.
    pub condition: String,
    pub url: String,
}

/// Canonical listing with a numeric price.
///
/// Serialized with the retrieval service's field names so downstream consumers see the
/// same record shape they would have seen before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "title")]
    pub title_native: String,
    pub price: u64,
    #[serde(rename = "condition")]
    pub condition_label: String,
    pub url: String,
}

impl Listing {
    pub fn new(
        title_native: impl Into<String>,
        price: u64,
        condition_label: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title_native: title_native.into(),
            price,
            condition_label: condition_label.into(),
            url: url.into(),
        }
    }
}
