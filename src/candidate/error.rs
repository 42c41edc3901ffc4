use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignmentError {
    /// A per-candidate list does not have one entry per listing.
    #[error("{field} has {actual} entries but the batch has {expected} listings")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A score entry points outside the batch or at a candidate already scored.
    #[error("score entry for candidate {index} is out of range or repeated (batch has {len})")]
    InvalidScoreIndex { index: usize, len: usize },
}
