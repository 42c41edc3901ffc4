use serde::{Deserialize, Serialize};

use super::error::ScoringError;
use super::types::ScoreVector;

/// Linear blend applied to a [`ScoreVector`].
///
/// Match quality is weighted highest and price second, so overt mismatches and overpriced
/// listings drop even when their titles read close to the request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub similarity: f32,
    pub match_level: f32,
    pub price: f32,
    pub condition: f32,
}

impl ScoreWeights {
    pub const DEFAULT: ScoreWeights = ScoreWeights {
        similarity: 0.2,
        match_level: 0.4,
        price: 0.3,
        condition: 0.1,
    };

    pub fn sum(&self) -> f32 {
        self.similarity + self.match_level + self.price + self.condition
    }

    /// Rejects negative or non-finite weights.
    ///
    /// Weights need not sum to one; when they do, the aggregate stays within the convex
    /// hull of the signal ranges.
    pub fn validate(&self) -> Result<(), ScoringError> {
        let named = [
            ("similarity", self.similarity),
            ("match_level", self.match_level),
            ("price", self.price),
            ("condition", self.condition),
        ];

        for (name, weight) in named {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ScoringError::InvalidWeights {
                    reason: format!("{name} weight must be finite and non-negative, got {weight}"),
                });
            }
        }

        Ok(())
    }

    #[inline]
    pub fn aggregate(&self, signals: &ScoreVector) -> f32 {
        self.similarity * signals.similarity
            + self.match_level * signals.match_level
            + self.price * signals.price
            + self.condition * signals.condition
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}
