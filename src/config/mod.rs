//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `MARKETPICK_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_EMBEDDING_CACHE_CAPACITY, DEFAULT_MAX_CANDIDATES, DEFAULT_SEARCH_BASE_URL,
    DEFAULT_TOP_K,
};
use crate::embedding::MiniLmConfig;

/// Recommender configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `MARKETPICK_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// MiniLM checkpoint directory. `None` runs the stub embedder.
    pub model_dir: Option<PathBuf>,

    /// Recommendations returned per request. Default: `3`.
    pub top_k: usize,

    /// Retrieved listings considered per request. Default: `20`.
    pub max_candidates: usize,

    /// Max cached embeddings; `0` disables the cache. Default: `10_000`.
    pub embedding_cache_capacity: u64,

    /// Marketplace search endpoint.
    pub search_base_url: String,

    /// Pin inference to the CPU. Default: `false`.
    pub force_cpu: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_dir: None,
            top_k: DEFAULT_TOP_K,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            embedding_cache_capacity: DEFAULT_EMBEDDING_CACHE_CAPACITY,
            search_base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            force_cpu: false,
        }
    }
}

impl Config {
    const ENV_MODEL_DIR: &'static str = MiniLmConfig::ENV_MODEL_DIR;
    const ENV_TOP_K: &'static str = "MARKETPICK_TOP_K";
    const ENV_MAX_CANDIDATES: &'static str = "MARKETPICK_MAX_CANDIDATES";
    const ENV_EMBEDDING_CACHE_CAPACITY: &'static str = "MARKETPICK_EMBEDDING_CACHE_CAPACITY";
    const ENV_SEARCH_BASE_URL: &'static str = "MARKETPICK_SEARCH_BASE_URL";
    const ENV_FORCE_CPU: &'static str = MiniLmConfig::ENV_FORCE_CPU;

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let model_dir = Self::parse_optional_path_from_env(Self::ENV_MODEL_DIR);
        let top_k = Self::parse_count_from_env(Self::ENV_TOP_K, defaults.top_k)?;
        let max_candidates =
            Self::parse_count_from_env(Self::ENV_MAX_CANDIDATES, defaults.max_candidates)?;
        let embedding_cache_capacity = Self::parse_u64_from_env(
            Self::ENV_EMBEDDING_CACHE_CAPACITY,
            defaults.embedding_cache_capacity,
        );
        let search_base_url =
            Self::parse_string_from_env(Self::ENV_SEARCH_BASE_URL, defaults.search_base_url);
        let force_cpu = Self::parse_bool_from_env(Self::ENV_FORCE_CPU, defaults.force_cpu);

        Ok(Self {
            model_dir,
            top_k,
            max_candidates,
            embedding_cache_capacity,
            search_base_url,
            force_cpu,
        })
    }

    /// Validates paths and basic invariants (does not load the model).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_k == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_TOP_K,
            });
        }

        if self.max_candidates == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_MAX_CANDIDATES,
            });
        }

        url::Url::parse(&self.search_base_url).map_err(|source| ConfigError::InvalidUrl {
            value: self.search_base_url.clone(),
            source,
        })?;

        if let Some(ref path) = self.model_dir {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Embedder settings derived from this config.
    pub fn embedder_config(&self) -> MiniLmConfig {
        let config = match self.model_dir {
            Some(ref dir) => MiniLmConfig::new(dir.clone()),
            None => MiniLmConfig::stub(),
        };
        config.with_force_cpu(self.force_cpu)
    }

    fn parse_count_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => {
                let count: usize = value.trim().parse().map_err(|e| ConfigError::ParseError {
                    name: var_name,
                    value: value.clone(),
                    source: e,
                })?;

                if count == 0 {
                    return Err(ConfigError::ZeroValue { name: var_name });
                }

                Ok(count)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    fn parse_bool_from_env(var_name: &str, default: bool) -> bool {
        env::var(var_name)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true"))
            .unwrap_or(default)
    }
}
