//! Term extraction for the vector space.

use once_cell::sync::Lazy;
use regex::Regex;

/// A term is a maximal run of two or more word characters.
///
/// `\w` is Unicode-aware, so scripts written without spaces (Han, Kana,
/// Thai) form whole runs instead of single-character segments.
static TERM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("Invalid term regex"));

/// Split `text` into lowercase terms.
///
/// Punctuation separates terms, so "don't" yields "don" and a dropped
/// one-character "t", and "3.5" yields nothing.
pub fn terms(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TERM.find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}
