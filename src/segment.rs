//! Sentence segmentation.
//!
//! The default [`PunctuationSegmenter`] is a heuristic: it splits after `.`,
//! `?` or `!` when whitespace follows. Abbreviations and decimal numbers are
//! not special-cased unless abbreviations are registered explicitly with
//! [`PunctuationSegmenter::with_abbreviations`].

use std::collections::HashSet;

/// Splits raw text into an ordered sequence of sentences.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Collapse every run of whitespace (newlines included) into a single space
/// and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Segment `text` with the default [`PunctuationSegmenter`].
pub fn segment(text: &str) -> Vec<String> {
    PunctuationSegmenter::new().segment(text)
}

/// Punctuation-driven segmenter.
#[derive(Debug, Clone, Default)]
pub struct PunctuationSegmenter {
    abbreviations: HashSet<String>,
}

impl PunctuationSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not split after these words when they end in a period.
    ///
    /// Entries are matched case-insensitively and without their trailing
    /// period, so both `"Dr"` and `"dr."` register "Dr.".
    pub fn with_abbreviations(mut self, abbreviations: &[&str]) -> Self {
        for abbrev in abbreviations {
            self.abbreviations
                .insert(abbrev.trim_end_matches('.').to_lowercase());
        }
        self
    }

    fn is_terminator(ch: char) -> bool {
        matches!(ch, '.' | '?' | '!')
    }

    fn ends_with_abbreviation(&self, fragment: &str) -> bool {
        if self.abbreviations.is_empty() {
            return false;
        }
        let last_word = fragment.rsplit(' ').next().unwrap_or(fragment);
        if !last_word.ends_with('.') {
            return false;
        }
        let normalized = last_word.trim_end_matches('.').to_lowercase();
        self.abbreviations.contains(&normalized)
    }
}

fn push_sentence(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    // Single characters are noise, not sentences.
    if trimmed.chars().count() > 1 {
        sentences.push(trimmed.to_string());
    }
}

impl Segmenter for PunctuationSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let normalized = normalize_whitespace(text);
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut prev = None;

        // After normalization the only whitespace left is a single ASCII space.
        for (idx, ch) in normalized.char_indices() {
            if ch == ' ' && prev.map_or(false, Self::is_terminator) {
                let fragment = &normalized[start..idx];
                if !self.ends_with_abbreviation(fragment) {
                    push_sentence(&mut sentences, fragment);
                    start = idx + 1;
                }
            }
            prev = Some(ch);
        }
        push_sentence(&mut sentences, &normalized[start..]);

        sentences
    }
}
