use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Embedder, EmbeddingError};

/// Test embedder returning registered vectors per text.
///
/// Unregistered texts get the default vector (a unit vector along the first axis unless
/// overridden). Every embedded text increments [`call_count`](MockEmbedder::call_count).
#[derive(Debug)]
pub struct MockEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    default: Vec<f32>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MockEmbedder {
    pub fn new(dim: usize) -> Self {
        let mut default = vec![0.0; dim];
        if let Some(first) = default.first_mut() {
            *first = 1.0;
        }

        Self {
            vectors: HashMap::new(),
            default,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.into(), vector);
        self
    }

    pub fn with_default(mut self, vector: Vec<f32>) -> Self {
        self.default = vector;
        self
    }

    /// Makes every call fail with an inference error carrying `reason`.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Embedder for MockEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(reason) = &self.failure {
            return Err(EmbeddingError::InferenceFailed {
                reason: reason.clone(),
            });
        }

        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.default.clone()))
    }

    fn embedding_dim(&self) -> usize {
        self.default.len()
    }
}
