use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ranking::Recommendation;

/// Ranked recommendations for one request, as handed to the message generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub request: String,
    /// Listings that were scored (after truncation to the candidate limit).
    pub candidate_count: usize,
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationReport {
    pub fn new(
        request_id: Uuid,
        request: impl Into<String>,
        candidate_count: usize,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        Self {
            request_id,
            generated_at: Utc::now(),
            request: request.into(),
            candidate_count,
            recommendations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
