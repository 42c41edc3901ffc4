use tracing::debug;

use crate::candidate::CandidateBatch;
use crate::embedding::Embedder;

use super::error::ScoringError;
use super::signals::{condition_score, match_level_score, price_scores, similarity_scores};
use super::types::{ScoreVector, ScoredCandidate};
use super::weights::ScoreWeights;

/// Computes signals and aggregate scores for aligned candidate batches.
///
/// Holds no per-request state; one scorer can serve concurrent requests as long as the
/// embedder can.
pub struct RecommendationScorer<E> {
    embedder: E,
    weights: ScoreWeights,
}

impl<E> std::fmt::Debug for RecommendationScorer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationScorer")
            .field("weights", &self.weights)
            .finish()
    }
}

impl<E: Embedder> RecommendationScorer<E> {
    pub fn new(embedder: E) -> Self {
        Self {
            embedder,
            weights: ScoreWeights::DEFAULT,
        }
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Result<Self, ScoringError> {
        weights.validate()?;
        self.weights = weights;
        Ok(self)
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    /// Scores every candidate, in batch order.
    ///
    /// Embedding failures are returned as-is; nothing is retried here.
    pub fn score_batch(
        &self,
        request: &str,
        batch: &CandidateBatch,
    ) -> Result<Vec<ScoredCandidate>, ScoringError> {
        if batch.is_empty() {
            debug!("Empty candidate batch, nothing to score");
            return Ok(Vec::new());
        }

        let similarities = similarity_scores(&self.embedder, request, &batch.titles_translated())?;
        let prices: Vec<u64> = batch.listings().map(|listing| listing.price).collect();
        let price_signal = price_scores(&prices);

        let scored: Vec<ScoredCandidate> = batch
            .iter()
            .zip(similarities)
            .zip(price_signal)
            .enumerate()
            .map(|(index, ((candidate, similarity), price))| {
                let signals = ScoreVector {
                    similarity,
                    match_level: match_level_score(&candidate.match_level),
                    price,
                    condition: condition_score(&candidate.listing.condition_label),
                };

                ScoredCandidate {
                    index,
                    signals,
                    aggregate: self.weights.aggregate(&signals),
                }
            })
            .collect();

        debug!(
            request_len = request.len(),
            candidates = scored.len(),
            best = scored
                .iter()
                .map(|s| s.aggregate)
                .fold(f32::NEG_INFINITY, f32::max),
            "Scored candidate batch"
        );

        Ok(scored)
    }
}
