//! Ledger of fixture fields that are allowed to fail.
//!
//! ```toml
//! [[known]]
//! fixture = "regression/abbreviation-oversplit.toml"
//! field = "sentences_a"
//! reason = "The punctuation segmenter does not special-case abbreviations"
//! ```
//!
//! `known` entries are accepted limitations; `pending` entries await a fix.
//! Any failing field not listed is a regression.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{SpecError, SpecResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

/// One fixture field allowed to fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Fixture path relative to the fixtures directory, `/`-separated.
    pub fixture: String,
    /// Expectation field, e.g. `sentences_a`.
    pub field: String,
    #[serde(default)]
    pub reason: Option<String>,
    /// YYYY-MM-DD
    #[serde(default)]
    pub added: Option<String>,
    #[serde(default)]
    pub issue: Option<String>,
}

/// How a failing field is classified against the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    Known,
    Pending,
    Regression,
}

impl FailureState {
    /// Prefix used in harness output.
    pub fn label(&self) -> &'static str {
        match self {
            FailureState::Known => "KNOWN",
            FailureState::Pending => "PENDING",
            FailureState::Regression => "FAIL",
        }
    }

    pub fn is_expected(&self) -> bool {
        !matches!(self, FailureState::Regression)
    }
}

impl ExpectedFailures {
    /// Read the ledger at `path`. No file means an empty ledger.
    pub fn load(path: &Path) -> SpecResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let load_error = |message: String| SpecError::Load {
            path: path.display().to_string(),
            message,
        };
        let content = fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        Self::parse(&content).map_err(|e| load_error(e.to_string()))
    }

    pub fn parse(content: &str) -> SpecResult<Self> {
        toml::from_str(content).map_err(|e| SpecError::Parse {
            message: e.to_string(),
        })
    }

    /// The ledger entry covering `field` of `fixture`, with its state.
    pub fn entry(&self, fixture: &str, field: &str) -> Option<(FailureState, &FailureEntry)> {
        let fixture = fixture.replace('\\', "/");
        let covers = |e: &&FailureEntry| e.field == field && e.fixture.replace('\\', "/") == fixture;

        self.known
            .iter()
            .find(covers)
            .map(|e| (FailureState::Known, e))
            .or_else(|| {
                self.pending
                    .iter()
                    .find(covers)
                    .map(|e| (FailureState::Pending, e))
            })
    }

    pub fn classify(&self, fixture: &str, field: &str) -> FailureState {
        self.entry(fixture, field)
            .map_or(FailureState::Regression, |(state, _)| state)
    }

    pub fn len(&self) -> usize {
        self.known.len() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-field tally of a harness run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessResult {
    pub checked: usize,
    pub passed: usize,
    pub known: usize,
    pub pending: usize,
    pub regressions: usize,
}

impl HarnessResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_passes(&mut self, count: usize) {
        self.checked += count;
        self.passed += count;
    }

    pub fn record_failure(&mut self, state: FailureState) {
        self.checked += 1;
        let bucket = match state {
            FailureState::Known => &mut self.known,
            FailureState::Pending => &mut self.pending,
            FailureState::Regression => &mut self.regressions,
        };
        *bucket += 1;
    }

    pub fn expected_failures(&self) -> usize {
        self.known + self.pending
    }

    /// Expected failures do not fail the run.
    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    pub fn exit_code(&self) -> i32 {
        i32::from(!self.success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const LEDGER: &str = r#"
[[known]]
fixture = "regression/abbreviation-oversplit.toml"
field = "sentences_a"
reason = "Abbreviations split sentences"

[[pending]]
fixture = "many-to-one.toml"
field = "matched_b"
added = "2026-10-01"
"#;

    #[test]
    fn test_unlisted_field_is_regression() {
        let ledger = ExpectedFailures::default();
        assert!(ledger.is_empty());
        assert_eq!(ledger.classify("pair.toml", "verdict"), FailureState::Regression);
        assert!(!FailureState::Regression.is_expected());
    }

    #[test]
    fn test_classify_known_and_pending() {
        let ledger = ExpectedFailures::parse(LEDGER).unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(
            ledger.classify("regression/abbreviation-oversplit.toml", "sentences_a"),
            FailureState::Known
        );
        assert_eq!(
            ledger.classify("many-to-one.toml", "matched_b"),
            FailureState::Pending
        );
        // Same fixture, other field.
        assert_eq!(
            ledger.classify("many-to-one.toml", "matched_a"),
            FailureState::Regression
        );
    }

    #[test]
    fn test_windows_separators_match() {
        let ledger = ExpectedFailures::parse(LEDGER).unwrap();
        let (state, entry) = ledger
            .entry("regression\\abbreviation-oversplit.toml", "sentences_a")
            .unwrap();
        assert_eq!(state, FailureState::Known);
        assert_eq!(entry.reason.as_deref(), Some("Abbreviations split sentences"));
    }

    #[test]
    fn test_tally() {
        let mut result = HarnessResult::new();
        result.record_passes(3);
        result.record_failure(FailureState::Known);
        result.record_failure(FailureState::Pending);
        assert!(result.success());
        assert_eq!(result.exit_code(), 0);
        assert_eq!(result.expected_failures(), 2);

        result.record_failure(FailureState::Regression);
        assert_eq!(
            result,
            HarnessResult {
                checked: 6,
                passed: 3,
                known: 1,
                pending: 1,
                regressions: 1,
            }
        );
        assert_eq!(result.exit_code(), 1);
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", LEDGER).unwrap();
        let ledger = ExpectedFailures::load(file.path()).unwrap();
        assert_eq!(ledger.known.len(), 1);
        assert_eq!(ledger.pending[0].added.as_deref(), Some("2026-10-01"));
    }

    #[test]
    fn test_load_bad_toml_reports_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[[known]]\nfixture = ").unwrap();
        match ExpectedFailures::load(file.path()).unwrap_err() {
            SpecError::Load { path, .. } => assert_eq!(path, file.path().display().to_string()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_empty_ledger() {
        let ledger = ExpectedFailures::load(Path::new("/nonexistent/ledger.toml")).unwrap();
        assert!(ledger.is_empty());
    }
}
