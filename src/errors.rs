//! Error types for document comparison.
//!
//! [`CompareError`] is what callers see. [`VectorSpaceError`] is raised while
//! fitting term weights and is absorbed by the comparator, which treats a
//! degenerate vocabulary as zero similarity.

use std::fmt;
use thiserror::Error;

/// Which of the two compared documents an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSide {
    A,
    B,
}

impl fmt::Display for DocumentSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSide::A => f.write_str("A"),
            DocumentSide::B => f.write_str("B"),
        }
    }
}

/// Errors that can occur while comparing two documents.
#[derive(Debug, Error)]
pub enum CompareError {
    /// A document is empty or whitespace-only (or its file had no extractable text).
    #[error("document {side} is empty or unsupported")]
    EmptyInput { side: DocumentSide },

    /// Configuration values are out of range.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Configuration file could not be read or parsed.
    #[error("failed to load configuration: {path}: {message}")]
    ConfigLoad { path: String, message: String },

    /// Annotation was asked to pair sentences with a flag list of another length.
    #[error("annotation length mismatch: {sentences} sentences, {flags} flags")]
    LengthMismatch { sentences: usize, flags: usize },
}

/// Raised when a vector space cannot be fit over its input strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorSpaceError {
    /// None of the fitted strings produced a single term.
    #[error("vocabulary is empty: no input string contains a term")]
    DegenerateVocabulary,
}

/// Result type for comparison operations.
pub type CompareResult<T> = Result<T, CompareError>;
