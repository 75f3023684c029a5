//! Human-readable failure and summary output.

use std::fmt::Write;

use crate::failures::{FailureState, HarnessResult};
use crate::fixture::SimilarityFixture;
use crate::runner::FieldMismatch;

/// Longest text excerpt shown per document.
const EXCERPT_CHARS: usize = 60;

fn excerpt(text: &str) -> String {
    let flat = doc_similarity::normalize_whitespace(text);
    if flat.chars().count() <= EXCERPT_CHARS {
        return flat;
    }
    let cut: String = flat.chars().take(EXCERPT_CHARS).collect();
    format!("{}…", cut)
}

/// Format one failing expectation with fixture context.
pub fn format_failure(
    fixture_name: &str,
    fixture: &SimilarityFixture,
    mismatch: &FieldMismatch,
    state: FailureState,
) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "{}: {} [{}]",
        state.label(),
        fixture_name,
        mismatch.field
    );
    if let Some(title) = &fixture.title {
        let _ = writeln!(output, "  {}", title);
    }
    let _ = writeln!(output, "  A: {}", excerpt(&fixture.text_a));
    let _ = writeln!(output, "  B: {}", excerpt(&fixture.text_b));
    let _ = write!(
        output,
        "  expected `{}`, found `{}`",
        mismatch.expected, mismatch.actual
    );

    output
}

/// One-line summary of a harness run.
pub fn format_summary(result: &HarnessResult) -> String {
    let status = if result.success() { "ok" } else { "FAILED" };
    format!(
        "{}: {} checked, {} passed, {} expected failures, {} regressions",
        status,
        result.checked,
        result.passed,
        result.expected_failures(),
        result.regressions
    )
}
