//! Fixture format.
//!
//! A fixture is a TOML document describing one comparison and what it should
//! produce:
//!
//! ```toml
//! title = "Near-identical opening sentence"
//! text_a = "The cat sat on the mat. It was sunny."
//! text_b = "The cat sat on the mat. It rained all day."
//! threshold = 0.6
//!
//! [expect]
//! verdict = "MODERATE"
//! overall_min = 50.0
//! overall_max = 80.0
//! sentence_match_pct = 50.0
//! matched_a = [true, false]
//! ```
//!
//! Every expectation is optional; only the ones present are checked.

use doc_similarity::{CompareConfig, CompareError, Verdict};
use serde::{Deserialize, Serialize};

use crate::errors::{SpecError, SpecResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityFixture {
    #[serde(default)]
    pub title: Option<String>,
    pub text_a: String,
    pub text_b: String,
    /// Overrides the default sentence match threshold.
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub expect: Expectation,
}

impl SimilarityFixture {
    pub fn config(&self) -> CompareConfig {
        match self.threshold {
            Some(threshold) => CompareConfig::new().with_threshold(threshold),
            None => CompareConfig::new(),
        }
    }
}

/// Expected outcome. Percentages are on the 0–100 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Expectation {
    #[serde(default)]
    pub verdict: Option<Verdict>,
    #[serde(default)]
    pub overall_min: Option<f64>,
    #[serde(default)]
    pub overall_max: Option<f64>,
    #[serde(default)]
    pub sentence_match_pct: Option<f64>,
    #[serde(default)]
    pub sentences_a: Option<usize>,
    #[serde(default)]
    pub sentences_b: Option<usize>,
    #[serde(default)]
    pub matched_a: Option<Vec<bool>>,
    #[serde(default)]
    pub matched_b: Option<Vec<bool>>,
    #[serde(default)]
    pub error: Option<ExpectedError>,
}

/// Error kinds a fixture can expect instead of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedError {
    EmptyInput,
    InvalidConfig,
}

impl ExpectedError {
    pub fn matches(&self, error: &CompareError) -> bool {
        matches!(
            (self, error),
            (ExpectedError::EmptyInput, CompareError::EmptyInput { .. })
                | (ExpectedError::InvalidConfig, CompareError::InvalidConfig { .. })
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExpectedError::EmptyInput => "empty_input",
            ExpectedError::InvalidConfig => "invalid_config",
        }
    }
}

/// Parse fixture TOML.
pub fn parse_fixture(content: &str) -> SpecResult<SimilarityFixture> {
    toml::from_str(content).map_err(|e| SpecError::Parse {
        message: e.to_string(),
    })
}
