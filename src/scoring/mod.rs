//! Candidate scoring: four independent signals blended into one aggregate score.
//!
//! | Signal | Source | Range |
//! |---|---|---|
//! | similarity | cosine of request vs. translated-title embedding | `[-1, 1]`, unclipped |
//! | match level | [`MatchLevel`] table lookup | `{1.0, 0.8, 0.6, 0.3, 0.1}`, unknown `0.0` |
//! | price | batch-relative inverted min-max | `[0, 1]` |
//! | condition | [`ConditionGrade`] table lookup | `{1.0, 0.9, 0.6, 0.5, 0.3, 0.1}`, unknown `0.0` |
//!
//! [`ScoreWeights::DEFAULT`] blends them as `0.2·similarity + 0.4·match + 0.3·price +
//! 0.1·condition`. Because similarity is not clipped, an aggregate can dip below zero for
//! a title that points away from the request; that is kept as-is.
//!
//! Price is the only signal that depends on the rest of the batch. The same listing can
//! score differently depending on what it is ranked against.

pub mod error;
pub mod scorer;
pub mod signals;
pub mod types;
pub mod weights;


pub use error::ScoringError;
pub use scorer::RecommendationScorer;
pub use signals::{
    ConditionGrade, MatchLevel, condition_score, match_level_score, price_scores,
    similarity_scores,
};
pub use types::{ScoreVector, ScoredCandidate};
pub use weights::ScoreWeights;
