use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::AlignmentError;
use crate::listing::Listing;

/// Per-listing output of the translation/evaluation service, in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(alias = "titles_en")]
    pub titles_translated: Vec<String>,
    pub match_levels: Vec<String>,
    pub match_reasons: Vec<String>,
}

/// A listing together with its evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub listing: Listing,
    pub title_translated: String,
    /// Match label as produced upstream; unknown labels are scored, not rejected.
    pub match_level: String,
    pub match_reason: String,
}

/// Candidates for one recommendation request.
///
/// Positions are the only identity a candidate has; they are stable for the lifetime of
/// the batch and serve as the ranking tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateBatch {
    candidates: Vec<Candidate>,
}

impl CandidateBatch {
    /// Zips listings with their evaluation, failing on any length mismatch.
    pub fn align(listings: Vec<Listing>, evaluation: Evaluation) -> Result<Self, AlignmentError> {
        let expected = listings.len();

        check_len("titles_translated", expected, evaluation.titles_translated.len())?;
        check_len("match_levels", expected, evaluation.match_levels.len())?;
        check_len("match_reasons", expected, evaluation.match_reasons.len())?;

        let candidates: Vec<Candidate> = listings
            .into_iter()
            .zip(evaluation.titles_translated)
            .zip(evaluation.match_levels)
            .zip(evaluation.match_reasons)
            .map(
                |(((listing, title_translated), match_level), match_reason)| Candidate {
                    listing,
                    title_translated,
                    match_level,
                    match_reason,
                },
            )
            .collect();

        debug!(count = candidates.len(), "Aligned candidate batch");

        Ok(Self { candidates })
    }

    pub fn from_candidates(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    /// Translated titles in batch order (the similarity scorer's documents).
    pub fn titles_translated(&self) -> Vec<&str> {
        self.candidates
            .iter()
            .map(|c| c.title_translated.as_str())
            .collect()
    }

    pub fn listings(&self) -> impl Iterator<Item = &Listing> {
        self.candidates.iter().map(|c| &c.listing)
    }
}

fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<(), AlignmentError> {
    if expected != actual {
        return Err(AlignmentError::LengthMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}
