//! In-memory embedding memoization.
//!
//! Titles repeat across requests (relisted items, identical product names), and the
//! request text is embedded once per call. [`CachedEmbedder`] keys vectors by the BLAKE3
//! hash of the text, so a hit returns exactly what the inner embedder produced.

use moka::sync::Cache;
use std::sync::Arc;
use tracing::debug;

use super::{Embedder, EmbeddingError};
use crate::hashing::hash_text;

/// Wraps an [`Embedder`] with a bounded LRU-style cache.
pub struct CachedEmbedder<E> {
    inner: E,
    entries: Cache<[u8; 32], Arc<Vec<f32>>>,
}

impl<E> std::fmt::Debug for CachedEmbedder<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedEmbedder")
            .field("entry_count", &self.entries.entry_count())
            .finish()
    }
}

impl<E: Embedder> CachedEmbedder<E> {
    /// Creates a cache holding at most `capacity` vectors.
    pub fn new(inner: E, capacity: u64) -> Self {
        Self {
            inner,
            entries: Cache::builder().max_capacity(capacity).build(),
        }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Returns `true` if `text` currently has a cached vector.
    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(&hash_text(text))
    }

    /// Number of cached vectors (after applying pending evictions).
    pub fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    pub fn clear(&self) {
        self.entries.invalidate_all();
        self.entries.run_pending_tasks();
    }
}

impl<E: Embedder> Embedder for CachedEmbedder<E> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let key = hash_text(text);

        if let Some(hit) = self.entries.get(&key) {
            return Ok(hit.as_ref().clone());
        }

        let embedding = self.inner.embed(text)?;
        self.entries.insert(key, Arc::new(embedding.clone()));
        Ok(embedding)
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let keys: Vec<[u8; 32]> = texts.iter().map(|text| hash_text(text)).collect();
        let mut results: Vec<Option<Vec<f32>>> = keys
            .iter()
            .map(|key| self.entries.get(key).map(|hit| hit.as_ref().clone()))
            .collect();

        let misses: Vec<usize> = results
            .iter()
            .enumerate()
            .filter(|(_, hit)| hit.is_none())
            .map(|(idx, _)| idx)
            .collect();

        debug!(
            total = texts.len(),
            misses = misses.len(),
            "Embedding cache lookup"
        );

        if !misses.is_empty() {
            let miss_texts: Vec<&str> = misses.iter().map(|&idx| texts[idx]).collect();
            let computed = self.inner.embed_batch(&miss_texts)?;

            if computed.len() != misses.len() {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!(
                        "embedder returned {} vectors for {} inputs",
                        computed.len(),
                        misses.len()
                    ),
                });
            }

            for (idx, embedding) in misses.into_iter().zip(computed) {
                self.entries.insert(keys[idx], Arc::new(embedding.clone()));
                results[idx] = Some(embedding);
            }
        }

        Ok(results.into_iter().flatten().collect())
    }

    fn embedding_dim(&self) -> usize {
        self.inner.embedding_dim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::MockEmbedder;

    #[test]
    fn test_repeated_embed_hits_cache() {
        let cached = CachedEmbedder::new(MockEmbedder::new(4), 16);

        let first = cached.embed("headphones").unwrap();
        let second = cached.embed("headphones").unwrap();

        assert_eq!(first, second);
        assert_eq!(cached.inner().call_count(), 1);
        assert!(cached.contains("headphones"));
    }

    #[test]
    fn test_batch_only_embeds_misses() {
        let mock = MockEmbedder::new(2)
            .with_vector("a", vec![1.0, 0.0])
            .with_vector("b", vec![0.0, 1.0]);
        let cached = CachedEmbedder::new(mock, 16);

        cached.embed("a").unwrap();
        let batch = cached.embed_batch(&["a", "b", "a"]).unwrap();

        assert_eq!(batch, vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0]]);
        // "a" was embedded up front; the batch only computed "b".
        assert_eq!(cached.inner().call_count(), 2);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cached = CachedEmbedder::new(MockEmbedder::new(2).failing("model offline"), 16);

        assert!(cached.embed("x").is_err());
        assert!(!cached.contains("x"));
        assert_eq!(cached.entry_count(), 0);
    }

    #[test]
    fn test_clear_empties_cache() {
        let cached = CachedEmbedder::new(MockEmbedder::new(2), 16);
        cached.embed("x").unwrap();
        cached.clear();
        assert!(!cached.contains("x"));
    }

    #[test]
    fn test_embedding_dim_delegates() {
        let cached = CachedEmbedder::new(MockEmbedder::new(7), 16);
        assert_eq!(cached.embedding_dim(), 7);
    }
}
