//! Top-K selection and enrichment.
//!
//! Candidates are ordered by descending aggregate score with a stable sort, so ties keep
//! their original batch order (first seen wins). Selected candidates are copied into
//! [`Recommendation`] records; the batch itself is never modified.

pub mod selector;
pub mod types;


pub use selector::{TopKSelector, select_top_k};
pub use types::Recommendation;
