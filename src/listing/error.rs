use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    /// The price text did not parse as a non-negative integer after separator cleanup.
    #[error("malformed price '{value}' for listing {index}")]
    MalformedPrice { index: usize, value: String },
}
