use tracing::{debug, info};
use uuid::Uuid;

use super::error::PipelineError;
use super::report::RecommendationReport;
use crate::candidate::{CandidateBatch, Evaluation};
use crate::embedding::Embedder;
use crate::listing::{Listing, RawListing, normalize_listings};
use crate::ranking::TopKSelector;
use crate::scoring::{RecommendationScorer, ScoreWeights};

/// Normalize, align, score and select, for one request's listings and evaluation.
///
/// Pure with respect to its inputs: the same request, listings and evaluation always
/// produce the same recommendations.
pub struct Recommender<E> {
    scorer: RecommendationScorer<E>,
    selector: TopKSelector,
}

impl<E> std::fmt::Debug for Recommender<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("scorer", &self.scorer)
            .field("selector", &self.selector)
            .finish()
    }
}

impl<E: Embedder> Recommender<E> {
    pub fn new(embedder: E) -> Self {
        Self {
            scorer: RecommendationScorer::new(embedder),
            selector: TopKSelector::default(),
        }
    }

    pub fn with_top_k(mut self, k: usize) -> Self {
        self.selector = TopKSelector::new(k);
        self
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Result<Self, PipelineError> {
        self.scorer = self.scorer.with_weights(weights)?;
        Ok(self)
    }

    pub fn top_k(&self) -> usize {
        self.selector.k()
    }

    pub fn scorer(&self) -> &RecommendationScorer<E> {
        &self.scorer
    }

    /// Recommends from raw retrieval records.
    pub fn recommend(
        &self,
        request: &str,
        raw_listings: &[RawListing],
        evaluation: Evaluation,
    ) -> Result<RecommendationReport, PipelineError> {
        let listings = normalize_listings(raw_listings)?;
        self.recommend_listings(Uuid::new_v4(), request, listings, evaluation)
    }

    /// Recommends from already-normalized listings.
    pub fn recommend_listings(
        &self,
        request_id: Uuid,
        request: &str,
        listings: Vec<Listing>,
        evaluation: Evaluation,
    ) -> Result<RecommendationReport, PipelineError> {
        let batch = CandidateBatch::align(listings, evaluation)?;
        let scored = self.scorer.score_batch(request, &batch)?;
        let recommendations = self
            .selector
            .select(&batch, &scored)
            .map_err(PipelineError::Ranking)?;

        for rec in &recommendations {
            debug!(
                rank = rec.rank,
                score = rec.recommendation_score,
                similarity = rec.signals.similarity,
                match_level = rec.signals.match_level,
                price = rec.signals.price,
                condition = rec.signals.condition,
                title = %rec.title_translated,
                "Recommendation"
            );
        }

        info!(
            %request_id,
            candidates = batch.len(),
            selected = recommendations.len(),
            "Ranked candidates"
        );

        Ok(RecommendationReport::new(
            request_id,
            request,
            batch.len(),
            recommendations,
        ))
    }
}
