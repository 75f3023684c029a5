//! Turn uploaded files into plain text for comparison.
//!
//! Supported inputs:
//!
//! - `.pdf` - text layer of every page, in page order
//! - `.txt` - bytes decoded as UTF-8
//!
//! Any other file type extracts to an empty string, which the comparator
//! rejects as empty input.

mod errors;
mod kind;

pub use errors::{IngestError, IngestResult};
pub use kind::DocumentKind;

use doc_similarity::Document;
use std::fs;
use std::path::Path;

/// An uploaded file: its display name and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a file from disk; the file name becomes the display name.
    pub fn read(path: &Path) -> IngestResult<Self> {
        let bytes = fs::read(path).map_err(|e| IngestError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }

    pub fn kind(&self) -> DocumentKind {
        DocumentKind::from_filename(&self.name)
    }

    pub fn extract_text(&self) -> IngestResult<String> {
        extract_text(&self.name, &self.bytes)
    }

    /// Extract the text and pair it with the file name.
    pub fn into_document(self) -> IngestResult<Document> {
        let text = self.extract_text()?;
        Ok(Document::new(self.name, text))
    }
}

/// Extract plain text from a file, dispatching on its name.
pub fn extract_text(name: &str, bytes: &[u8]) -> IngestResult<String> {
    let kind = DocumentKind::from_filename(name);
    let text = match kind {
        DocumentKind::Pdf => pdf_to_text(bytes)?,
        DocumentKind::PlainText => String::from_utf8(bytes.to_vec())
            .map_err(|e| IngestError::Utf8 {
                name: name.to_string(),
                message: e.to_string(),
            })?,
        DocumentKind::Unsupported => {
            tracing::warn!(name, "unsupported file type, no text extracted");
            String::new()
        }
    };
    tracing::debug!(name, ?kind, len = text.len(), "extracted text");
    Ok(text)
}

/// Text layer of a PDF held in memory.
///
/// Scanned pages without a text layer contribute nothing.
pub fn pdf_to_text(bytes: &[u8]) -> IngestResult<String> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| IngestError::Pdf {
        message: e.to_string(),
    })
}
