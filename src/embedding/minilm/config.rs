use std::path::PathBuf;

use crate::constants::{MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN};
use crate::embedding::error::EmbeddingError;

/// Files a MiniLM checkpoint directory must contain.
pub const REQUIRED_MODEL_FILES: [&str; 3] = ["config.json", "model.safetensors", "tokenizer.json"];

/// Configuration for [`MiniLmEmbedder`](super::MiniLmEmbedder).
#[derive(Debug, Clone)]
pub struct MiniLmConfig {
    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    pub model_dir: PathBuf,
    /// Tokens kept per input; longer inputs are truncated.
    pub max_seq_len: usize,
    /// Expected output dimension; must match the checkpoint's hidden size.
    pub embedding_dim: usize,
    /// Skip GPU probing even when a GPU backend is compiled in.
    pub force_cpu: bool,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for MiniLmConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            max_seq_len: MINILM_MAX_SEQ_LEN,
            embedding_dim: MINILM_EMBEDDING_DIM,
            force_cpu: false,
            testing_stub: false,
        }
    }
}

impl MiniLmConfig {
    /// Env var used to locate the model directory.
    pub const ENV_MODEL_DIR: &'static str = "MARKETPICK_MODEL_DIR";
    /// Env var that pins inference to the CPU when set to `1` or `true`.
    pub const ENV_FORCE_CPU: &'static str = "MARKETPICK_FORCE_CPU";

    /// Creates a config for a checkpoint directory.
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    /// Loads config from the environment, falling back to stub mode when no model
    /// directory is set.
    pub fn from_env() -> Self {
        let model_dir = std::env::var(Self::ENV_MODEL_DIR)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let force_cpu = std::env::var(Self::ENV_FORCE_CPU)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true"))
            .unwrap_or(false);

        let config = match model_dir {
            Some(dir) => Self::new(dir),
            None => Self::stub(),
        };

        Self {
            force_cpu,
            ..config
        }
    }

    pub fn with_force_cpu(mut self, force_cpu: bool) -> Self {
        self.force_cpu = force_cpu;
        self
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be greater than zero".to_string(),
            });
        }

        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be greater than zero".to_string(),
            });
        }

        if self.testing_stub {
            return Ok(());
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is required (stubbing is disabled)".to_string(),
            });
        }

        if !self.model_dir.is_dir() {
            return Err(EmbeddingError::ModelNotFound {
                path: self.model_dir.clone(),
            });
        }

        if let Some(missing) = self.missing_files().into_iter().next() {
            return Err(EmbeddingError::ModelNotFound { path: missing });
        }

        Ok(())
    }

    /// Returns `true` if the directory holds every required checkpoint file.
    pub fn model_available(&self) -> bool {
        !self.model_dir.as_os_str().is_empty()
            && self.model_dir.is_dir()
            && self.missing_files().is_empty()
    }

    /// Required checkpoint files absent from `model_dir`.
    pub fn missing_files(&self) -> Vec<PathBuf> {
        REQUIRED_MODEL_FILES
            .iter()
            .map(|name| self.model_dir.join(name))
            .filter(|path| !path.is_file())
            .collect()
    }
}
