//! Error types for the fixture harness.

use thiserror::Error;

/// Errors that can occur while loading or parsing fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Fixture content is not valid fixture TOML.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Error loading a fixture file.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },
}

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;
