//! Listing normalization.
//!
//! The retrieval service hands back [`RawListing`]s whose price may be a locale-formatted
//! string (`"12,345"`). [`normalize_listings`] turns a batch into canonical [`Listing`]s
//! with integer prices before anything is scored. Price scoring is batch-relative, so a
//! listing with an unparsable price is never given a substitute value.

pub mod error;
pub mod normalizer;
pub mod types;


pub use error::ListingError;
pub use normalizer::{normalize_listing, normalize_listings, normalize_price};
pub use types::{Listing, RawListing, RawPrice};
