//! Positionally aligned candidate batches.
//!
//! The evaluation service returns three independent lists (translated titles, match
//! levels, match reasons) that must line up with the listing batch. [`CandidateBatch::align`]
//! zips them into one structure up front and rejects any length mismatch, so the scorers
//! and the selector never deal with parallel lists.

pub mod batch;
pub mod error;

#[cfg(test)]
mod tests;

pub use batch::{Candidate, CandidateBatch, Evaluation};
pub use error::AlignmentError;
