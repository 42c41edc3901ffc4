//! Cross-cutting, shared constants.
//!
//! Scoring weights live in [`crate::scoring::ScoreWeights`]; this module only holds the
//! batch-shaping and model-geometry defaults that several modules need to agree on.

/// Number of recommendations returned when the caller does not ask for another `k`.
pub const DEFAULT_TOP_K: usize = 3;

/// Maximum number of retrieved listings that are evaluated and scored per request.
pub const DEFAULT_MAX_CANDIDATES: usize = 20;

/// Price spread at or below which a batch carries no price signal.
///
/// Every listing in such a batch receives the maximum price score.
pub const PRICE_EPSILON: f64 = 1e-8;

/// Output dimension of all-MiniLM-L6-v2.
pub const MINILM_EMBEDDING_DIM: usize = 384;

/// Max tokens all-MiniLM-L6-v2 was trained on.
pub const MINILM_MAX_SEQ_LEN: usize = 256;

pub const DEFAULT_EMBEDDING_CACHE_CAPACITY: u64 = 10_000;

pub const DEFAULT_SEARCH_BASE_URL: &str = "https://jp.mercari.com/search";
