use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid search base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("no native-language keywords to search for")]
    EmptyKeywords,

    #[error("{field} must be a finite non-negative number, got {value}")]
    InvalidPriceBound { field: &'static str, value: f64 },
}
