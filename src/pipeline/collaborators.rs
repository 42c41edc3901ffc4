//! Seams to the external services around the recommender core.

use std::sync::Arc;

use url::Url;

use super::error::CollaboratorError;
use crate::candidate::Evaluation;
use crate::listing::RawListing;
use crate::search::SearchParams;

/// Turns a free-text shopping request into search keywords and filters.
pub trait SearchExtractor: Send + Sync {
    fn extract(&self, request: &str) -> Result<SearchParams, CollaboratorError>;
}

/// Fetches candidate listings for a search, in marketplace order.
pub trait ListingRetriever: Send + Sync {
    fn retrieve(&self, url: &Url, params: &SearchParams)
    -> Result<Vec<RawListing>, CollaboratorError>;
}

/// Translates listing titles and judges how well each matches the request.
///
/// The returned lists must be positional: entry `i` describes `titles_native[i]`.
pub trait ListingEvaluator: Send + Sync {
    fn evaluate(
        &self,
        request: &str,
        titles_native: &[&str],
    ) -> Result<Evaluation, CollaboratorError>;
}

impl<T: SearchExtractor + ?Sized> SearchExtractor for Arc<T> {
    fn extract(&self, request: &str) -> Result<SearchParams, CollaboratorError> {
        (**self).extract(request)
    }
}

impl<T: ListingRetriever + ?Sized> ListingRetriever for Arc<T> {
    fn retrieve(
        &self,
        url: &Url,
        params: &SearchParams,
    ) -> Result<Vec<RawListing>, CollaboratorError> {
        (**self).retrieve(url, params)
    }
}

impl<T: ListingEvaluator + ?Sized> ListingEvaluator for Arc<T> {
    fn evaluate(
        &self,
        request: &str,
        titles_native: &[&str],
    ) -> Result<Evaluation, CollaboratorError> {
        (**self).evaluate(request, titles_native)
    }
}
