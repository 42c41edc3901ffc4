use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::collaborators::{ListingEvaluator, ListingRetriever, SearchExtractor};
use super::error::{CollaboratorError, SessionError};
use crate::candidate::Evaluation;
use crate::listing::RawListing;
use crate::search::SearchParams;

/// Captured collaborator outputs for one request, replayed in place of live services.
///
/// ```json
/// {
///   "request": "a used Nintendo Switch under 30000 yen",
///   "search": { "keywords_en": ["nintendo switch"], "keywords_ja": ["任天堂スイッチ"] },
///   "listings": [{ "title": "…", "price": "12,345", "condition": "未使用に近い", "url": "…" }],
///   "evaluation": { "titles_en": ["…"], "match_levels": ["Good match"], "match_reasons": ["…"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedSession {
    pub request: String,
    pub search: SearchParams,
    pub listings: Vec<RawListing>,
    pub evaluation: Evaluation,
}

impl RecordedSession {
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let session = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            listings = session.listings.len(),
            "Loaded recorded session"
        );
        Ok(session)
    }
}

impl SearchExtractor for RecordedSession {
    fn extract(&self, _request: &str) -> Result<SearchParams, CollaboratorError> {
        Ok(self.search.clone())
    }
}

impl ListingRetriever for RecordedSession {
    fn retrieve(
        &self,
        _url: &Url,
        _params: &SearchParams,
    ) -> Result<Vec<RawListing>, CollaboratorError> {
        Ok(self.listings.clone())
    }
}

impl ListingEvaluator for RecordedSession {
    /// Replays the recorded evaluation.
    ///
    /// An evaluation recorded one-to-one with `listings` is cut to the titles actually
    /// asked about. Any other recording is returned as-is so that alignment rejects it.
    fn evaluate(
        &self,
        _request: &str,
        titles_native: &[&str],
    ) -> Result<Evaluation, CollaboratorError> {
        let mut evaluation = self.evaluation.clone();
        let recorded = self.listings.len();
        let covers_listings = evaluation.titles_translated.len() == recorded
            && evaluation.match_levels.len() == recorded
            && evaluation.match_reasons.len() == recorded;

        if covers_listings {
            let n = titles_native.len();
            evaluation.titles_translated.truncate(n);
            evaluation.match_levels.truncate(n);
            evaluation.match_reasons.truncate(n);
        }
        Ok(evaluation)
    }
}
