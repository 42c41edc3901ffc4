//! Search parameters produced by the extraction service and the marketplace search URL
//! built from them.
//!
//! Only the native-language keywords and the price bounds reach the URL. The other
//! filters are carried for downstream consumers.

mod builder;
mod error;
mod params;

#[cfg(test)]
mod tests;

pub use builder::build_search_url;
pub use error::SearchError;
pub use params::{ConditionFilter, SearchFilters, SearchParams};
