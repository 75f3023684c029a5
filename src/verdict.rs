//! Three-band classification of the overall document similarity.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    High,
    Moderate,
    Low,
}

impl Verdict {
    /// Human-readable label shown next to the score.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::High => "High similarity (possible plagiarism)",
            Verdict::Moderate => "Moderate similarity",
            Verdict::Low => "Low similarity",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower bounds (inclusive) of the high and moderate bands, on a 0–1 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerdictBands {
    pub high: f64,
    pub moderate: f64,
}

impl VerdictBands {
    pub fn new(high: f64, moderate: f64) -> Self {
        Self { high, moderate }
    }

    pub fn classify(&self, score: f64) -> Verdict {
        if score >= self.high {
            Verdict::High
        } else if score >= self.moderate {
            Verdict::Moderate
        } else {
            Verdict::Low
        }
    }

    /// Bands are usable when `0 <= moderate <= high <= 1`.
    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.moderate)
            && (0.0..=1.0).contains(&self.high)
            && self.moderate <= self.high
    }
}

impl Default for VerdictBands {
    fn default() -> Self {
        Self::new(0.80, 0.50)
    }
}
