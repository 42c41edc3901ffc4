use serde::{Deserialize, Serialize};

/// The four per-candidate signals before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    /// Cosine similarity between the request and the translated title.
    pub similarity: f32,
    /// Match-level table score.
    pub match_level: f32,
    /// Batch-relative price score (cheapest is `1.0`).
    pub price: f32,
    /// Condition table score.
    pub condition: f32,
}

/// Signals and aggregate for the candidate at `index` in its batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    pub index: usize,
    pub signals: ScoreVector,
    pub aggregate: f32,
}
