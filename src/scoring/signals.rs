//! The four per-candidate signal scorers.
//!
//! Each function is pure over its batch input: the same batch always yields the same
//! vector. Only [`similarity_scores`] touches an external capability.

use tracing::{debug, warn};

use super::error::ScoringError;
use crate::constants::PRICE_EPSILON;
use crate::embedding::{Embedder, cosine_similarity};

/// Match-quality vocabulary of the evaluation service, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchLevel {
    Excellent,
    Good,
    Partial,
    Weak,
    NoMatch,
}

impl MatchLevel {
    pub const ALL: [MatchLevel; 5] = [
        MatchLevel::Excellent,
        MatchLevel::Good,
        MatchLevel::Partial,
        MatchLevel::Weak,
        MatchLevel::NoMatch,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            MatchLevel::Excellent => "Excellent match",
            MatchLevel::Good => "Good match",
            MatchLevel::Partial => "Partial match",
            MatchLevel::Weak => "Weak match",
            MatchLevel::NoMatch => "No match",
        }
    }

    pub const fn score(self) -> f32 {
        match self {
            MatchLevel::Excellent => 1.0,
            MatchLevel::Good => 0.8,
            MatchLevel::Partial => 0.6,
            MatchLevel::Weak => 0.3,
            MatchLevel::NoMatch => 0.1,
        }
    }

    /// Exact label match; no trimming or case folding.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }
}

/// Marketplace condition vocabulary, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionGrade {
    /// 新品、未使用
    NewUnused,
    /// 未使用に近い
    LikeNew,
    /// 目立った傷や汚れなし
    NoNoticeableDamage,
    /// やや傷や汚れあり
    SlightDamage,
    /// 傷や汚れあり
    Damaged,
    /// 全体的に状態が悪い
    Poor,
}

impl ConditionGrade {
    pub const ALL: [ConditionGrade; 6] = [
        ConditionGrade::NewUnused,
        ConditionGrade::LikeNew,
        ConditionGrade::NoNoticeableDamage,
        ConditionGrade::SlightDamage,
        ConditionGrade::Damaged,
        ConditionGrade::Poor,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ConditionGrade::NewUnused => "新品、未使用",
            ConditionGrade::LikeNew => "未使用に近い",
            ConditionGrade::NoNoticeableDamage => "目立った傷や汚れなし",
            ConditionGrade::SlightDamage => "やや傷や汚れあり",
            ConditionGrade::Damaged => "傷や汚れあり",
            ConditionGrade::Poor => "全体的に状態が悪い",
        }
    }

    pub const fn score(self) -> f32 {
        match self {
            ConditionGrade::NewUnused => 1.0,
            ConditionGrade::LikeNew => 0.9,
            ConditionGrade::NoNoticeableDamage => 0.6,
            ConditionGrade::SlightDamage => 0.5,
            ConditionGrade::Damaged => 0.3,
            ConditionGrade::Poor => 0.1,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|grade| grade.label() == label)
    }
}

/// Scores a match label; unknown labels score `0.0` and are logged.
pub fn match_level_score(label: &str) -> f32 {
    match MatchLevel::from_label(label) {
        Some(level) => level.score(),
        None => {
            warn!(label, "Unrecognized match level, scoring 0.0");
            0.0
        }
    }
}

/// Scores a condition label; unknown labels score `0.0` and are logged.
pub fn condition_score(label: &str) -> f32 {
    match ConditionGrade::from_label(label) {
        Some(grade) => grade.score(),
        None => {
            warn!(label, "Unrecognized condition label, scoring 0.0");
            0.0
        }
    }
}

/// Inverted min-max price normalization over one batch.
///
/// The cheapest listing scores `1.0` and the most expensive `0.0`. When the spread is at
/// most [`PRICE_EPSILON`] there is nothing to discriminate on and every listing scores
/// `1.0`.
pub fn price_scores(prices: &[u64]) -> Vec<f32> {
    let (Some(&min), Some(&max)) = (prices.iter().min(), prices.iter().max()) else {
        return Vec::new();
    };

    let spread = (max - min) as f64;
    if spread <= PRICE_EPSILON {
        debug!(price = max, "Uniform batch price, no price signal");
        return vec![1.0; prices.len()];
    }

    prices
        .iter()
        .map(|&price| ((max - price) as f64 / spread) as f32)
        .collect()
}

/// Cosine similarity of the request against every title.
///
/// Embeds the request once and the titles in one batch call. Scores are not clipped.
pub fn similarity_scores<E: Embedder + ?Sized>(
    embedder: &E,
    request: &str,
    titles: &[&str],
) -> Result<Vec<f32>, ScoringError> {
    if titles.is_empty() {
        return Ok(Vec::new());
    }

    let query = embedder.embed(request)?;
    let documents = embedder.embed_batch(titles)?;

    if documents.len() != titles.len() {
        return Err(ScoringError::EmbeddingCountMismatch {
            expected: titles.len(),
            actual: documents.len(),
        });
    }

    documents
        .iter()
        .enumerate()
        .map(|(index, document)| {
            if document.len() != query.len() {
                return Err(ScoringError::DimensionMismatch {
                    index,
                    expected: query.len(),
                    actual: document.len(),
                });
            }

            let similarity = cosine_similarity(&query, document);
            if !similarity.is_finite() {
                return Err(ScoringError::NonFiniteSimilarity { index });
            }

            Ok(similarity)
        })
        .collect()
}
