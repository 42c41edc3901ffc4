//! Marketpick library crate (used by the CLI and integration tests).
//!
//! Ranks marketplace listings against a free-text shopping request by blending four
//! signals: semantic similarity between the request and each translated title, the
//! evaluation service's match level, a batch-relative price score and the listing's
//! condition grade.
//!
//! # Public API Surface
//!
//! ## Core Flow
//! - [`normalize_listings`] - Canonical listings with integer prices
//! - [`CandidateBatch`], [`Evaluation`] - Listings aligned with their evaluation
//! - [`RecommendationScorer`], [`ScoreWeights`] - Signals and aggregate scores
//! - [`TopKSelector`], [`Recommendation`] - Ranked, enriched output
//! - [`Recommender`], [`RecommendationPipeline`] - Orchestration
//!
//! ## Embedding
//! - [`Embedder`] - Seam for sentence embedders
//! - [`MiniLmEmbedder`], [`MiniLmConfig`] - candle-backed all-MiniLM-L6-v2
//! - [`CachedEmbedder`] - Bounded embedding cache
//!
//! ## Collaborators
//! - [`SearchExtractor`], [`ListingRetriever`], [`ListingEvaluator`] - External services
//! - [`RecordedSession`] - Offline replay of captured service output
//! - [`build_search_url`] - Marketplace search URL
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod candidate;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod hashing;
pub mod listing;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod search;

pub use candidate::{AlignmentError, Candidate, CandidateBatch, Evaluation};
pub use config::{Config, ConfigError};
pub use embedding::{
    CachedEmbedder, Embedder, EmbeddingError, MiniLmConfig, MiniLmEmbedder, cosine_similarity,
};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use hashing::hash_text;
pub use listing::{
    Listing, ListingError, RawListing, RawPrice, normalize_listing, normalize_listings,
    normalize_price,
};
#[cfg(any(test, feature = "mock"))]
pub use pipeline::{MockEvaluator, MockExtractor, MockRetriever};
pub use pipeline::{
    CollaboratorError, ListingEvaluator, ListingRetriever, PipelineError, RecommendationPipeline,
    RecommendationReport, Recommender, RecordedSession, SearchExtractor, SessionError,
};
pub use ranking::{Recommendation, TopKSelector, select_top_k};
pub use scoring::{
    ConditionGrade, MatchLevel, RecommendationScorer, ScoreVector, ScoreWeights, ScoredCandidate,
    ScoringError, condition_score, match_level_score, price_scores, similarity_scores,
};
pub use search::{ConditionFilter, SearchError, SearchFilters, SearchParams, build_search_url};
