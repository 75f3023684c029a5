//! Fixture-driven regression testing for doc-similarity.
//!
//! Test cases are TOML files describing a document pair and the outcome the
//! comparator should produce. A separate ledger lists failures that are
//! expected (known limitations or pending fixes) so that only regressions
//! fail the run.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture format and parsing
//! - [`loader`] - Fixture file discovery
//! - [`runner`] - Runs fixtures and checks expectations
//! - [`failures`] - Expected failures ledger
//! - [`formatter`] - Failure and summary output
//! - [`errors`] - Error types

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{parse_fixture, ExpectedError, Expectation, SimilarityFixture};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture, EXPECTED_FAILURES_FILE};
pub use runner::{run_fixture, run_harness, FieldMismatch, FixtureOutcome, HarnessReport};
