use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading or running a title embedder.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// A required checkpoint file or directory is absent.
    #[error("MiniLM checkpoint not found: {}", path.display())]
    ModelNotFound { path: PathBuf },

    /// The checkpoint exists but could not be read into a model.
    #[error("failed to load MiniLM checkpoint: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("sentence embedding failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("tokenizer failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("invalid MiniLM configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<candle_core::Error> for EmbeddingError {
    fn from(err: candle_core::Error) -> Self {
        EmbeddingError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}
