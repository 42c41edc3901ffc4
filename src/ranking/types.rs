use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::listing::Listing;
use crate::scoring::{ScoreVector, ScoredCandidate};

/// A selected listing enriched with the explanation the message generator needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// 1-based position in the ranking.
    pub rank: usize,
    #[serde(flatten)]
    pub listing: Listing,
    pub title_translated: String,
    /// The evaluation service's match reason, passed through unchanged.
    pub recommendation_reason: String,
    /// Aggregate score.
    pub recommendation_score: f32,
    pub match_level: String,
    pub signals: ScoreVector,
}

impl Recommendation {
    /// Copies a candidate and its scores into a new record.
    pub fn from_scored(rank: usize, candidate: &Candidate, scored: &ScoredCandidate) -> Self {
        Self {
            rank,
            listing: candidate.listing.clone(),
            title_translated: candidate.title_translated.clone(),
            recommendation_reason: candidate.match_reason.clone(),
            recommendation_score: scored.aggregate,
            match_level: candidate.match_level.clone(),
            signals: scored.signals,
        }
    }
}
