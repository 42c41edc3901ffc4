//! all-MiniLM-L6-v2 sentence embedder (BERT + mean pooling + L2 normalization).
//!
//! Use [`MiniLmConfig::stub`] for tests/examples without model files.

/// MiniLM configuration.
pub mod config;


pub use config::{MiniLmConfig, REQUIRED_MODEL_FILES};

use candle_core::{Device, Tensor};
use tokenizers::Tokenizer;
use tracing::{debug, info, warn};

use crate::embedding::Embedder;
use crate::embedding::bert::BertSentenceEncoder;
use crate::embedding::device::{device_label, select_device};
use crate::embedding::error::EmbeddingError;
use crate::embedding::utils::load_tokenizer_with_truncation;
use crate::hashing::hash_text;

enum EmbedderBackend {
    Model {
        encoder: BertSentenceEncoder,
        tokenizer: Tokenizer,
        device: Device,
    },
    Stub,
}

/// Sentence embedder used by the similarity scorer (supports stub mode).
pub struct MiniLmEmbedder {
    backend: EmbedderBackend,
    config: MiniLmConfig,
}

impl std::fmt::Debug for MiniLmEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiniLmEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    EmbedderBackend::Model { device, .. } => {
                        format!("Model({})", device_label(device))
                    }
                    EmbedderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("embedding_dim", &self.config.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl MiniLmEmbedder {
    /// Loads the embedder from a config (stub mode is supported).
    pub fn load(config: MiniLmConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("MiniLM embedder running in STUB mode (similarity scores are not semantic)");
            return Ok(Self {
                backend: EmbedderBackend::Stub,
                config,
            });
        }

        let device = select_device(config.force_cpu)?;
        debug!(device = device_label(&device), "Selected compute device for MiniLM");

        let encoder = BertSentenceEncoder::load(&config.model_dir, &device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            }
        })?;

        if encoder.hidden_size() != config.embedding_dim {
            return Err(EmbeddingError::InvalidConfig {
                reason: format!(
                    "embedding_dim ({}) does not match model hidden_size ({})",
                    config.embedding_dim,
                    encoder.hidden_size()
                ),
            });
        }

        let tokenizer = load_tokenizer_with_truncation(&config.model_dir, config.max_seq_len)
            .map_err(|e| EmbeddingError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            })?;

        info!(
            model_dir = %config.model_dir.display(),
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            device = device_label(&device),
            "MiniLM model loaded"
        );

        Ok(Self {
            backend: EmbedderBackend::Model {
                encoder,
                tokenizer,
                device,
            },
            config,
        })
    }

    /// Creates a stub embedder.
    pub fn stub() -> Result<Self, EmbeddingError> {
        Self::load(MiniLmConfig::stub())
    }

    fn embed_with_model(
        &self,
        text: &str,
        encoder: &BertSentenceEncoder,
        tokenizer: &Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        debug!(
            text_len = text.len(),
            token_count = encoding.get_ids().len(),
            "Generating embedding"
        );

        let input_ids = Tensor::new(encoding.get_ids(), device)?.unsqueeze(0)?;
        let type_ids = Tensor::new(encoding.get_type_ids(), device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), device)?.unsqueeze(0)?;

        let pooled = encoder
            .forward(&input_ids, &type_ids, &attention_mask)
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("BERT forward pass failed: {}", e),
            })?;

        let embedding = pooled.squeeze(0)?.to_vec1::<f32>()?;

        Ok(normalize_l2(embedding))
    }

    fn embed_stub(&self, text: &str) -> Vec<f32> {
        let digest = hash_text(text);
        let mut seed_bytes = [0u8; 8];
        seed_bytes.copy_from_slice(&digest[..8]);
        let mut state = u64::from_le_bytes(seed_bytes);

        let embedding = (0..self.config.embedding_dim)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
                ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0
            })
            .collect();

        normalize_l2(embedding)
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Stub)
    }

    /// Returns `true` if a model is loaded.
    pub fn has_model(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Model { .. })
    }

    pub fn config(&self) -> &MiniLmConfig {
        &self.config
    }
}

impl Embedder for MiniLmEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            EmbedderBackend::Model {
                encoder,
                tokenizer,
                device,
            } => self.embed_with_model(text, encoder, tokenizer, device),
            EmbedderBackend::Stub => Ok(self.embed_stub(text)),
        }
    }

    fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }
}

/// Scales a vector to unit length (zero vectors are returned unchanged).
pub fn normalize_l2(mut embedding: Vec<f32>) -> Vec<f32> {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in &mut embedding {
            *x /= norm;
        }
    }

    embedding
}
