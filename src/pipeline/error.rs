use std::path::PathBuf;

use thiserror::Error;

use crate::candidate::AlignmentError;
use crate::listing::ListingError;
use crate::scoring::ScoringError;
use crate::search::SearchError;

/// Failure reported by an external collaborator (extraction, retrieval, evaluation).
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Errors from a recommendation run, one variant per stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("search extraction failed: {0}")]
    Extraction(#[source] CollaboratorError),

    #[error("search URL construction failed: {0}")]
    Search(#[from] SearchError),

    #[error("listing retrieval failed: {0}")]
    Retrieval(#[source] CollaboratorError),

    #[error("listing normalization failed: {0}")]
    Normalization(#[from] ListingError),

    #[error("listing evaluation failed: {0}")]
    Evaluation(#[source] CollaboratorError),

    #[error("evaluation does not line up with the listings: {0}")]
    Alignment(#[from] AlignmentError),

    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),

    #[error("ranking failed: {0}")]
    Ranking(#[source] AlignmentError),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse session: {0}")]
    Parse(#[from] serde_json::Error),
}
