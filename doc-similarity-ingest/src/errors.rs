//! Error types for text extraction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// The file could not be read.
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// A `.txt` file was not valid UTF-8.
    #[error("{name} is not valid UTF-8: {message}")]
    Utf8 { name: String, message: String },

    /// The PDF could not be parsed.
    #[error("failed to extract PDF text: {message}")]
    Pdf { message: String },
}

pub type IngestResult<T> = Result<T, IngestError>;
