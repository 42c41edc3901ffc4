use tracing::{debug, info, info_span};
use uuid::Uuid;

use super::collaborators::{ListingEvaluator, ListingRetriever, SearchExtractor};
use super::error::PipelineError;
use super::recommender::Recommender;
use super::report::RecommendationReport;
use crate::candidate::Evaluation;
use crate::constants::{DEFAULT_MAX_CANDIDATES, DEFAULT_SEARCH_BASE_URL};
use crate::embedding::Embedder;
use crate::listing::normalize_listings;
use crate::search::build_search_url;

/// End-to-end run: extract, search, retrieve, evaluate, then rank.
pub struct RecommendationPipeline<X, R, V, E> {
    extractor: X,
    retriever: R,
    evaluator: V,
    recommender: Recommender<E>,
    search_base_url: String,
    max_candidates: usize,
}

impl<X, R, V, E> RecommendationPipeline<X, R, V, E>
where
    X: SearchExtractor,
    R: ListingRetriever,
    V: ListingEvaluator,
    E: Embedder,
{
    pub fn new(extractor: X, retriever: R, evaluator: V, recommender: Recommender<E>) -> Self {
        Self {
            extractor,
            retriever,
            evaluator,
            recommender,
            search_base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    pub fn with_search_base_url(mut self, base: impl Into<String>) -> Self {
        self.search_base_url = base.into();
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    pub fn recommender(&self) -> &Recommender<E> {
        &self.recommender
    }

    /// Runs every stage for `request`. The first failing stage aborts the run.
    pub fn run(&self, request: &str) -> Result<RecommendationReport, PipelineError> {
        let request_id = Uuid::new_v4();
        let _span = info_span!("recommend", %request_id).entered();

        let params = info_span!("extract")
            .in_scope(|| self.extractor.extract(request))
            .map_err(PipelineError::Extraction)?;
        debug!(
            keywords_en = ?params.keywords_en,
            keywords_ja = ?params.keywords_ja,
            "Extracted search parameters"
        );

        let url = build_search_url(&self.search_base_url, &params)?;

        let mut raw_listings = info_span!("retrieve", url = %url)
            .in_scope(|| self.retriever.retrieve(&url, &params))
            .map_err(PipelineError::Retrieval)?;
        if raw_listings.len() > self.max_candidates {
            debug!(
                retrieved = raw_listings.len(),
                kept = self.max_candidates,
                "Truncating retrieved listings"
            );
            raw_listings.truncate(self.max_candidates);
        }

        let listings = normalize_listings(&raw_listings)?;

        let evaluation = if listings.is_empty() {
            info!("No listings retrieved, skipping evaluation");
            Evaluation::default()
        } else {
            let titles: Vec<&str> = listings.iter().map(|l| l.title_native.as_str()).collect();
            info_span!("evaluate", count = titles.len())
                .in_scope(|| self.evaluator.evaluate(request, &titles))
                .map_err(PipelineError::Evaluation)?
        };

        info_span!("rank").in_scope(|| {
            self.recommender
                .recommend_listings(request_id, request, listings, evaluation)
        })
    }
}
