use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use url::Url;

use super::collaborators::{ListingEvaluator, ListingRetriever, SearchExtractor};
use super::error::CollaboratorError;
use crate::candidate::Evaluation;
use crate::listing::RawListing;
use crate::search::SearchParams;

/// Returns fixed search parameters, or a forced failure.
#[derive(Debug, Default)]
pub struct MockExtractor {
    params: SearchParams,
    failure: Option<String>,
}

impl MockExtractor {
    pub fn new(params: SearchParams) -> Self {
        Self {
            params,
            failure: None,
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            params: SearchParams::default(),
            failure: Some(reason.into()),
        }
    }
}

impl SearchExtractor for MockExtractor {
    fn extract(&self, _request: &str) -> Result<SearchParams, CollaboratorError> {
        match &self.failure {
            Some(reason) => Err(reason.clone().into()),
            None => Ok(self.params.clone()),
        }
    }
}

/// Returns fixed listings and records the URLs it was asked for.
#[derive(Debug, Default)]
pub struct MockRetriever {
    listings: Vec<RawListing>,
    failure: Option<String>,
    urls: Mutex<Vec<String>>,
}

impl MockRetriever {
    pub fn new(listings: Vec<RawListing>) -> Self {
        Self {
            listings,
            ..Default::default()
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Default::default()
        }
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.urls.lock().map(|urls| urls.clone()).unwrap_or_default()
    }
}

impl ListingRetriever for MockRetriever {
    fn retrieve(
        &self,
        url: &Url,
        _params: &SearchParams,
    ) -> Result<Vec<RawListing>, CollaboratorError> {
        if let Ok(mut urls) = self.urls.lock() {
            urls.push(url.to_string());
        }
        match &self.failure {
            Some(reason) => Err(reason.clone().into()),
            None => Ok(self.listings.clone()),
        }
    }
}

/// Evaluation stand-in.
///
/// With no fixed evaluation it echoes the titles back as translations, all rated with
/// `match_level`.
#[derive(Debug)]
pub struct MockEvaluator {
    evaluation: Option<Evaluation>,
    match_level: String,
    failure: Option<String>,
    calls: AtomicUsize,
    seen_titles: Mutex<Vec<String>>,
}

impl Default for MockEvaluator {
    fn default() -> Self {
        Self {
            evaluation: None,
            match_level: "Good match".to_string(),
            failure: None,
            calls: AtomicUsize::new(0),
            seen_titles: Mutex::new(Vec::new()),
        }
    }
}

impl MockEvaluator {
    pub fn new(evaluation: Evaluation) -> Self {
        Self {
            evaluation: Some(evaluation),
            ..Default::default()
        }
    }

    pub fn echo(match_level: impl Into<String>) -> Self {
        Self {
            match_level: match_level.into(),
            ..Default::default()
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Titles passed to the most recent call.
    pub fn seen_titles(&self) -> Vec<String> {
        self.seen_titles
            .lock()
            .map(|titles| titles.clone())
            .unwrap_or_default()
    }
}

impl ListingEvaluator for MockEvaluator {
    fn evaluate(
        &self,
        _request: &str,
        titles_native: &[&str],
    ) -> Result<Evaluation, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut seen) = self.seen_titles.lock() {
            *seen = titles_native.iter().map(|t| t.to_string()).collect();
        }

        if let Some(reason) = &self.failure {
            return Err(reason.clone().into());
        }

        if let Some(evaluation) = &self.evaluation {
            return Ok(evaluation.clone());
        }

        Ok(Evaluation {
            titles_translated: titles_native.iter().map(|t| t.to_string()).collect(),
            match_levels: vec![self.match_level.clone(); titles_native.len()],
            match_reasons: titles_native
                .iter()
                .map(|t| format!("{} matches the request", t))
                .collect(),
        })
    }
}
