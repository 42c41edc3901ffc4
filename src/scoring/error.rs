use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("embedder returned {actual} title vectors for {expected} titles")]
    EmbeddingCountMismatch { expected: usize, actual: usize },

    #[error("embedding dimension mismatch for title {index}: expected {expected}, got {actual}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("similarity for title {index} is not a finite number")]
    NonFiniteSimilarity { index: usize },

    #[error("invalid score weights: {reason}")]
    InvalidWeights { reason: String },
}
