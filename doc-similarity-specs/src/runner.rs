//! Runs fixtures through the comparator and checks their expectations.

use doc_similarity::{compare, ComparisonResult};
use std::path::Path;

use crate::errors::SpecResult;
use crate::failures::{ExpectedFailures, HarnessResult};
use crate::fixture::SimilarityFixture;
use crate::formatter::format_failure;
use crate::loader::load_all_fixtures;

/// Percentages closer than this are considered equal.
const PCT_TOLERANCE: f64 = 0.005;

/// One expectation that did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMismatch {
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl FieldMismatch {
    fn new(field: &str, expected: impl ToString, actual: impl ToString) -> Self {
        Self {
            field: field.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Outcome of running one fixture.
#[derive(Debug, Clone, Default)]
pub struct FixtureOutcome {
    /// Number of expectation fields checked.
    pub checked: usize,
    pub mismatches: Vec<FieldMismatch>,
    pub result: Option<ComparisonResult>,
}

impl FixtureOutcome {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    fn check(&mut self, ok: bool, mismatch: impl FnOnce() -> FieldMismatch) {
        self.checked += 1;
        if !ok {
            self.mismatches.push(mismatch());
        }
    }
}

fn format_flags(flags: &[bool]) -> String {
    let items: Vec<&str> = flags.iter().map(|f| if *f { "true" } else { "false" }).collect();
    format!("[{}]", items.join(", "))
}

/// Run a fixture and compare the outcome with its expectations.
pub fn run_fixture(fixture: &SimilarityFixture) -> FixtureOutcome {
    let mut outcome = FixtureOutcome::default();
    let expect = &fixture.expect;

    let result = match compare(&fixture.text_a, &fixture.text_b, &fixture.config()) {
        Ok(result) => result,
        Err(error) => {
            let ok = expect.error.map_or(false, |e| e.matches(&error));
            outcome.check(ok, || {
                FieldMismatch::new(
                    "error",
                    expect.error.map_or("no error", |e| e.name()),
                    &error,
                )
            });
            return outcome;
        }
    };

    if let Some(expected) = expect.error {
        outcome.check(false, || FieldMismatch::new("error", expected.name(), "no error"));
    }

    if let Some(verdict) = expect.verdict {
        outcome.check(result.verdict == verdict, || {
            FieldMismatch::new("verdict", format!("{verdict:?}"), format!("{:?}", result.verdict))
        });
    }

    let overall = result.overall_similarity_pct;
    if let Some(min) = expect.overall_min {
        outcome.check(overall >= min - PCT_TOLERANCE, || {
            FieldMismatch::new("overall_min", format!(">= {min:.2}"), format!("{overall:.2}"))
        });
    }
    if let Some(max) = expect.overall_max {
        outcome.check(overall <= max + PCT_TOLERANCE, || {
            FieldMismatch::new("overall_max", format!("<= {max:.2}"), format!("{overall:.2}"))
        });
    }

    if let Some(pct) = expect.sentence_match_pct {
        let actual = result.sentence_match_pct;
        outcome.check((actual - pct).abs() < PCT_TOLERANCE, || {
            FieldMismatch::new("sentence_match_pct", format!("{pct:.2}"), format!("{actual:.2}"))
        });
    }

    if let Some(count) = expect.sentences_a {
        outcome.check(result.sentences_a.len() == count, || {
            FieldMismatch::new("sentences_a", count, result.sentences_a.len())
        });
    }
    if let Some(count) = expect.sentences_b {
        outcome.check(result.sentences_b.len() == count, || {
            FieldMismatch::new("sentences_b", count, result.sentences_b.len())
        });
    }

    if let Some(flags) = &expect.matched_a {
        outcome.check(&result.matched_a == flags, || {
            FieldMismatch::new("matched_a", format_flags(flags), format_flags(&result.matched_a))
        });
    }
    if let Some(flags) = &expect.matched_b {
        outcome.check(&result.matched_b == flags, || {
            FieldMismatch::new("matched_b", format_flags(flags), format_flags(&result.matched_b))
        });
    }

    outcome.result = Some(result);
    outcome
}

/// Result of running every fixture in a directory.
#[derive(Debug, Clone, Default)]
pub struct HarnessReport {
    pub result: HarnessResult,
    /// Formatted diagnostics for every failing field, expected or not.
    pub failures: Vec<String>,
}

/// Run all fixtures under `dir`, classifying failures against `expected`.
pub fn run_harness(dir: &Path, expected: &ExpectedFailures) -> SpecResult<HarnessReport> {
    let mut report = HarnessReport::default();

    for (name, fixture) in load_all_fixtures(dir)? {
        let outcome = run_fixture(&fixture);
        tracing::debug!(
            fixture = %name,
            checked = outcome.checked,
            failed = outcome.mismatches.len(),
            "ran fixture"
        );

        report
            .result
            .record_passes(outcome.checked - outcome.mismatches.len());
        for mismatch in &outcome.mismatches {
            let state = expected.classify(&name, &mismatch.field);
            report.result.record_failure(state);
            report
                .failures
                .push(format_failure(&name, &fixture, mismatch, state));
            if !state.is_expected() {
                tracing::warn!(fixture = %name, field = %mismatch.field, "fixture regression");
            }
        }
    }

    Ok(report)
}
