//! Greedy best-match sentence alignment.
//!
//! Each sentence of document A nominates its most similar sentence of
//! document B. The nomination is accepted when the score reaches the
//! threshold. No one-to-one assignment is enforced: several A sentences may
//! nominate, and mark, the same B sentence.

use serde::{Deserialize, Serialize};

use crate::similarity::SimilarityMatrix;

/// Default similarity a sentence pair needs to count as a match.
pub const DEFAULT_THRESHOLD: f64 = 0.60;

/// An accepted alignment between sentence `a_index` of document A and
/// sentence `b_index` of document B.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentencePair {
    pub a_index: usize,
    pub b_index: usize,
    pub score: f64,
}

/// Per-sentence match flags for both documents plus the accepted pairs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub matched_a: Vec<bool>,
    pub matched_b: Vec<bool>,
    pub pairs: Vec<SentencePair>,
}

impl MatchOutcome {
    /// All-false flags of the given lengths.
    pub fn unmatched(len_a: usize, len_b: usize) -> Self {
        Self {
            matched_a: vec![false; len_a],
            matched_b: vec![false; len_b],
            pairs: Vec::new(),
        }
    }

    /// Number of matched sentences in document A.
    pub fn matched_count(&self) -> usize {
        self.matched_a.iter().filter(|m| **m).count()
    }

    /// Matched share of document A, `0.0` when A has no sentences.
    pub fn match_ratio(&self) -> f64 {
        if self.matched_a.is_empty() {
            return 0.0;
        }
        self.matched_count() as f64 / self.matched_a.len() as f64
    }
}

/// Row-wise greedy matcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceMatcher {
    threshold: f64,
}

impl SentenceMatcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn run(&self, matrix: &SimilarityMatrix) -> MatchOutcome {
        if matrix.is_empty() {
            return MatchOutcome::unmatched(matrix.rows(), matrix.cols());
        }

        let mut outcome = MatchOutcome::unmatched(matrix.rows(), matrix.cols());
        for row in 0..matrix.rows() {
            let Some((col, score)) = matrix.best_in_row(row) else {
                continue;
            };
            if score >= self.threshold {
                outcome.matched_a[row] = true;
                outcome.matched_b[col] = true;
                outcome.pairs.push(SentencePair {
                    a_index: row,
                    b_index: col,
                    score,
                });
            }
        }

        tracing::trace!(
            threshold = self.threshold,
            pairs = outcome.pairs.len(),
            "matched sentences"
        );
        outcome
    }
}

impl Default for SentenceMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

/// Match with `threshold`, returning only the two flag lists.
pub fn match_flags(matrix: &SimilarityMatrix, threshold: f64) -> (Vec<bool>, Vec<bool>) {
    let outcome = SentenceMatcher::new(threshold).run(matrix);
    (outcome.matched_a, outcome.matched_b)
}
