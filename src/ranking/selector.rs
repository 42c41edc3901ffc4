use tracing::debug;

use super::types::Recommendation;
use crate::candidate::{AlignmentError, CandidateBatch};
use crate::constants::DEFAULT_TOP_K;
use crate::scoring::ScoredCandidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopKSelector {
    k: usize,
}

impl Default for TopKSelector {
    fn default() -> Self {
        Self { k: DEFAULT_TOP_K }
    }
}

impl TopKSelector {
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the `min(k, batch.len())` best candidates, best first.
    ///
    /// `scored` must hold exactly one entry per candidate, and its indices must cover
    /// every position in `batch` once.
    pub fn select(
        &self,
        batch: &CandidateBatch,
        scored: &[ScoredCandidate],
    ) -> Result<Vec<Recommendation>, AlignmentError> {
        if scored.len() != batch.len() {
            return Err(AlignmentError::LengthMismatch {
                field: "scores",
                expected: batch.len(),
                actual: scored.len(),
            });
        }

        let mut seen = vec![false; batch.len()];
        for entry in scored {
            match seen.get_mut(entry.index) {
                Some(slot) if !*slot => *slot = true,
                _ => {
                    return Err(AlignmentError::InvalidScoreIndex {
                        index: entry.index,
                        len: batch.len(),
                    });
                }
            }
        }

        let mut ranked: Vec<&ScoredCandidate> = scored.iter().collect();
        // Equal aggregates keep batch order.
        ranked.sort_by(|a, b| b.aggregate.total_cmp(&a.aggregate).then(a.index.cmp(&b.index)));

        let recommendations = ranked
            .into_iter()
            .take(self.k)
            .enumerate()
            .map(|(position, scored)| {
                let candidate = batch.get(scored.index).ok_or(AlignmentError::InvalidScoreIndex {
                    index: scored.index,
                    len: batch.len(),
                })?;
                Ok(Recommendation::from_scored(position + 1, candidate, scored))
            })
            .collect::<Result<Vec<_>, AlignmentError>>()?;

        debug!(
            k = self.k,
            candidates = batch.len(),
            selected = recommendations.len(),
            top_score = recommendations.first().map(|r| r.recommendation_score),
            "Selected top-k recommendations"
        );

        Ok(recommendations)
    }
}

/// Shorthand for `TopKSelector::new(k).select(batch, scored)`.
pub fn select_top_k(
    batch: &CandidateBatch,
    scored: &[ScoredCandidate],
    k: usize,
) -> Result<Vec<Recommendation>, AlignmentError> {
    TopKSelector::new(k).select(batch, scored)
}
