//! Sentence embeddings for the similarity signal.
//!
//! - [`Embedder`] is the narrow seam the scorer depends on.
//! - [`minilm`] provides a candle-backed all-MiniLM-L6-v2 implementation (with a stub mode).
//! - [`cache`] memoizes embeddings for repeated titles and requests.

/// BERT encoder + mean pooling used by the MiniLM embedder.
pub mod bert;
pub mod cache;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// all-MiniLM-L6-v2 sentence embedder.
pub mod minilm;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod similarity;
/// Tokenizer loading helpers.
pub mod utils;

use std::sync::Arc;

pub use cache::CachedEmbedder;
pub use error::EmbeddingError;
pub use minilm::{MiniLmConfig, MiniLmEmbedder};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
pub use similarity::cosine_similarity;

/// Maps text to fixed-length vectors comparable by cosine similarity.
///
/// Implementations must return vectors of [`embedding_dim`](Embedder::embedding_dim)
/// length and must be safe to share across concurrent scoring calls.
pub trait Embedder: Send + Sync {
    /// Embeds a single string.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Embeds several strings, in order. The default runs [`embed`](Embedder::embed)
    /// sequentially.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    /// Length of every vector this embedder produces.
    fn embedding_dim(&self) -> usize;
}

impl<E: Embedder + ?Sized> Embedder for Arc<E> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).embed(text)
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        (**self).embed_batch(texts)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }
}
