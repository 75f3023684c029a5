/// File types the extractor understands, decided by file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
    Unsupported,
}

impl DocumentKind {
    /// Case-insensitive suffix check: `.pdf` or `.txt`.
    pub fn from_filename(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.ends_with(".pdf") {
            DocumentKind::Pdf
        } else if lower.ends_with(".txt") {
            DocumentKind::PlainText
        } else {
            DocumentKind::Unsupported
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, DocumentKind::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_filename() {
        assert_eq!(DocumentKind::from_filename("paper.pdf"), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_filename("PAPER.PDF"), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_filename("notes.txt"), DocumentKind::PlainText);
        assert_eq!(DocumentKind::from_filename("notes.txt.zip"), DocumentKind::Unsupported);
        assert_eq!(DocumentKind::from_filename("pdf"), DocumentKind::Unsupported);
    }

    #[test]
    fn test_is_supported() {
        assert!(DocumentKind::Pdf.is_supported());
        assert!(!DocumentKind::Unsupported.is_supported());
    }
}
