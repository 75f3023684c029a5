//! Render sentences with matched spans marked up for display.

use serde::{Deserialize, Serialize};

use crate::errors::{CompareError, CompareResult};

/// Marker placed around matched sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum MarkStyle {
    /// `<mark>…</mark>`
    Html,
    /// Arbitrary open/close markers, e.g. `[[` and `]]` for terminals.
    Custom { open: String, close: String },
}

impl MarkStyle {
    pub fn custom(open: &str, close: &str) -> Self {
        MarkStyle::Custom {
            open: open.to_string(),
            close: close.to_string(),
        }
    }

    /// `[[…]]`, readable in plain text.
    pub fn brackets() -> Self {
        Self::custom("[[", "]]")
    }

    fn open(&self) -> &str {
        match self {
            MarkStyle::Html => "<mark>",
            MarkStyle::Custom { open, .. } => open,
        }
    }

    fn close(&self) -> &str {
        match self {
            MarkStyle::Html => "</mark>",
            MarkStyle::Custom { close, .. } => close,
        }
    }
}

impl Default for MarkStyle {
    fn default() -> Self {
        MarkStyle::Html
    }
}

/// Join `sentences` with single spaces, wrapping those whose flag is set.
///
/// Embedded newlines become spaces.
pub fn annotate<S: AsRef<str>>(
    sentences: &[S],
    flags: &[bool],
    style: &MarkStyle,
) -> CompareResult<String> {
    if sentences.len() != flags.len() {
        return Err(CompareError::LengthMismatch {
            sentences: sentences.len(),
            flags: flags.len(),
        });
    }

    let parts: Vec<String> = sentences
        .iter()
        .zip(flags)
        .map(|(sentence, &matched)| {
            let safe = sentence.as_ref().replace('\n', " ");
            if matched {
                format!("{}{}{}", style.open(), safe, style.close())
            } else {
                safe
            }
        })
        .collect();

    Ok(parts.join(" "))
}
