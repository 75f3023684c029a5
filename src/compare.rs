//! Document comparison pipeline.
//!
//! A comparison runs strictly in order: input check, document-level score,
//! segmentation, sentence-level scores, matching, annotation, verdict, and
//! assembly of the [`ComparisonResult`]. Each call fits its own vector spaces
//! and shares nothing with other calls.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::annotate::annotate;
use crate::config::CompareConfig;
use crate::errors::{CompareError, CompareResult, DocumentSide, VectorSpaceError};
use crate::matcher::{MatchOutcome, SentenceMatcher, SentencePair};
use crate::segment::{PunctuationSegmenter, Segmenter};
use crate::similarity::cosine;
use crate::vector_space::ProjectedPair;
use crate::verdict::Verdict;

/// A named plain-text document, typically an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Everything one comparison produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub name_a: Option<String>,
    pub name_b: Option<String>,
    /// Cosine similarity of the whole documents, in `[0, 1]`.
    pub overall_similarity: f64,
    /// `overall_similarity` on a 0–100 scale, rounded to 2 decimals.
    pub overall_similarity_pct: f64,
    pub verdict: Verdict,
    pub sentences_a: Vec<String>,
    pub sentences_b: Vec<String>,
    pub matched_a: Vec<bool>,
    pub matched_b: Vec<bool>,
    pub pairs: Vec<SentencePair>,
    pub annotated_a: String,
    pub annotated_b: String,
    /// Matched share of document A's sentences, 0–100, rounded to 2 decimals.
    pub sentence_match_pct: f64,
}

/// Display fields for a result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedComparison {
    pub result: String,
    pub verdict: String,
    pub highlighted1: String,
    pub highlighted2: String,
    pub sent_match_pct: f64,
    pub filename1: String,
    pub filename2: String,
}

impl ComparisonResult {
    pub fn render(&self) -> RenderedComparison {
        RenderedComparison {
            result: format_pct(self.overall_similarity_pct),
            verdict: self.verdict.label().to_string(),
            highlighted1: self.annotated_a.clone(),
            highlighted2: self.annotated_b.clone(),
            sent_match_pct: self.sentence_match_pct,
            filename1: self.name_a.clone().unwrap_or_default(),
            filename2: self.name_b.clone().unwrap_or_default(),
        }
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Overall similarity: {:.2}% ({})",
            self.overall_similarity_pct, self.verdict
        )?;
        writeln!(
            f,
            "Sentence matches:   {:.2}% of document A ({}/{})",
            self.sentence_match_pct,
            self.matched_a.iter().filter(|m| **m).count(),
            self.matched_a.len()
        )?;
        writeln!(f, "--- A: {}", self.name_a.as_deref().unwrap_or("document A"))?;
        writeln!(f, "{}", self.annotated_a)?;
        writeln!(f, "--- B: {}", self.name_b.as_deref().unwrap_or("document B"))?;
        write!(f, "{}", self.annotated_b)
    }
}

/// Convert a `[0, 1]` ratio to a percentage rounded to 2 decimals.
pub fn round_pct(ratio: f64) -> f64 {
    (ratio * 10_000.0).round() / 100.0
}

/// Shortest form of an already rounded percentage, keeping one decimal
/// for whole numbers: `64.73`, `50.5`, `100.0`.
pub fn format_pct(pct: f64) -> String {
    if pct.fract() == 0.0 {
        format!("{:.1}", pct)
    } else {
        pct.to_string()
    }
}

/// Runs comparisons with a fixed configuration and segmentation strategy.
pub struct Comparator {
    config: CompareConfig,
    segmenter: Box<dyn Segmenter>,
}

impl Comparator {
    /// Validates `config` up front so every later call can rely on it.
    pub fn new(config: CompareConfig) -> CompareResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            segmenter: Box::new(PunctuationSegmenter::new()),
        })
    }

    /// Replace the sentence segmentation strategy.
    pub fn with_segmenter(mut self, segmenter: impl Segmenter + 'static) -> Self {
        self.segmenter = Box::new(segmenter);
        self
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compare two named documents; the names are carried into the result.
    pub fn compare_documents(
        &self,
        a: &Document,
        b: &Document,
    ) -> CompareResult<ComparisonResult> {
        let mut result = self.compare(&a.text, &b.text)?;
        result.name_a = Some(a.name.clone());
        result.name_b = Some(b.name.clone());
        Ok(result)
    }

    pub fn compare(&self, text_a: &str, text_b: &str) -> CompareResult<ComparisonResult> {
        if text_a.trim().is_empty() {
            return Err(CompareError::EmptyInput {
                side: DocumentSide::A,
            });
        }
        if text_b.trim().is_empty() {
            return Err(CompareError::EmptyInput {
                side: DocumentSide::B,
            });
        }

        let _span = tracing::debug_span!("compare", len_a = text_a.len(), len_b = text_b.len())
            .entered();

        let overall_similarity = document_similarity(text_a, text_b);

        let sentences_a = self.segmenter.segment(text_a);
        let sentences_b = self.segmenter.segment(text_b);
        tracing::debug!(
            sentences_a = sentences_a.len(),
            sentences_b = sentences_b.len(),
            "segmented documents"
        );

        let outcome = self.match_sentences(&sentences_a, &sentences_b);

        let style = &self.config.mark_style;
        let annotated_a = annotate(&sentences_a, &outcome.matched_a, style)?;
        let annotated_b = annotate(&sentences_b, &outcome.matched_b, style)?;

        let verdict = self.config.bands.classify(overall_similarity);
        let sentence_match_pct = round_pct(outcome.match_ratio());

        tracing::debug!(
            overall = overall_similarity,
            ?verdict,
            matched = outcome.matched_count(),
            "comparison finished"
        );

        Ok(ComparisonResult {
            name_a: None,
            name_b: None,
            overall_similarity,
            overall_similarity_pct: round_pct(overall_similarity),
            verdict,
            sentences_a,
            sentences_b,
            matched_a: outcome.matched_a,
            matched_b: outcome.matched_b,
            pairs: outcome.pairs,
            annotated_a,
            annotated_b,
            sentence_match_pct,
        })
    }

    /// Fit one space over both sentence lists and match them.
    ///
    /// Empty lists and term-less sentence pools yield all-false flags.
    pub fn match_sentences<S: AsRef<str>>(
        &self,
        sentences_a: &[S],
        sentences_b: &[S],
    ) -> MatchOutcome {
        if sentences_a.is_empty() || sentences_b.is_empty() {
            return MatchOutcome::unmatched(sentences_a.len(), sentences_b.len());
        }

        match ProjectedPair::fit(sentences_a, sentences_b) {
            Ok(pair) => SentenceMatcher::new(self.config.threshold).run(&pair.similarity_matrix()),
            Err(VectorSpaceError::DegenerateVocabulary) => {
                tracing::debug!("sentence vocabulary is empty, nothing can match");
                MatchOutcome::unmatched(sentences_a.len(), sentences_b.len())
            }
        }
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self {
            config: CompareConfig::default(),
            segmenter: Box::new(PunctuationSegmenter::new()),
        }
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Cosine similarity of two whole documents in a space fit on just the pair.
///
/// A pair with no terms at all scores 0.
pub fn document_similarity(text_a: &str, text_b: &str) -> f64 {
    match ProjectedPair::fit(&[text_a], &[text_b]) {
        Ok(pair) => cosine(&pair.left()[0], &pair.right()[0]),
        Err(VectorSpaceError::DegenerateVocabulary) => {
            tracing::debug!("document vocabulary is empty, similarity is 0");
            0.0
        }
    }
}

/// Compare two texts with `config`.
pub fn compare(
    text_a: &str,
    text_b: &str,
    config: &CompareConfig,
) -> CompareResult<ComparisonResult> {
    Comparator::new(config.clone())?.compare(text_a, text_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::MarkStyle;

    #[test]
    fn test_round_pct() {
        assert_eq!(round_pct(0.5), 50.0);
        assert_eq!(round_pct(1.0), 100.0);
        assert_eq!(round_pct(0.123456), 12.35);
        assert_eq!(round_pct(0.0), 0.0);
    }

    #[test]
    fn test_empty_input_rejected_before_scoring() {
        let err = Comparator::default().compare("   ", "hello").unwrap_err();
        assert!(matches!(
            err,
            CompareError::EmptyInput {
                side: DocumentSide::A
            }
        ));
        let err = Comparator::default().compare("hello", "\n\t").unwrap_err();
        assert!(matches!(
            err,
            CompareError::EmptyInput {
                side: DocumentSide::B
            }
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CompareConfig::new().with_threshold(3.0);
        assert!(Comparator::new(config.clone()).is_err());
        assert!(compare("a text", "b text", &config).is_err());
    }

    #[test]
    fn test_symbol_only_documents_score_zero() {
        let result = Comparator::default().compare("!!! ???", "... ---").unwrap();
        assert_eq!(result.overall_similarity, 0.0);
        assert_eq!(result.verdict, Verdict::Low);
        assert!(result.matched_a.iter().all(|m| !m));
    }

    #[test]
    fn test_document_names_carried() {
        let a = Document::new("first.txt", "Shared words appear here.");
        let b = Document::new("second.pdf", "Shared words appear here.");
        let result = Comparator::default().compare_documents(&a, &b).unwrap();
        assert_eq!(result.name_a.as_deref(), Some("first.txt"));
        assert_eq!(result.name_b.as_deref(), Some("second.pdf"));
        let rendered = result.render();
        assert_eq!(rendered.filename1, "first.txt");
        assert_eq!(rendered.filename2, "second.pdf");
        assert_eq!(rendered.result, "100.0");
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(64.73), "64.73");
        assert_eq!(format_pct(50.5), "50.5");
        assert_eq!(format_pct(100.0), "100.0");
        assert_eq!(format_pct(0.0), "0.0");
        assert_eq!(format_pct(round_pct(0.123456)), "12.35");
    }

    #[test]
    fn test_display_report() {
        let comparator =
            Comparator::new(CompareConfig::new().with_mark_style(MarkStyle::brackets())).unwrap();
        let a = Document::new("a.txt", "Hello world. Hello there.");
        let b = Document::new("b.txt", "Hello world. Hello there.");
        let result = comparator.compare_documents(&a, &b).unwrap();
        insta::assert_snapshot!(result.to_string(), @r###"
        Overall similarity: 100.00% (High similarity (possible plagiarism))
        Sentence matches:   100.00% of document A (2/2)
        --- A: a.txt
        [[Hello world.]] [[Hello there.]]
        --- B: b.txt
        [[Hello world.]] [[Hello there.]]
        "###);
    }

    #[test]
    fn test_custom_segmenter_is_used() {
        let comparator = Comparator::default()
            .with_segmenter(PunctuationSegmenter::new().with_abbreviations(&["dr"]));
        let result = comparator
            .compare("Dr. Smith visited today.", "Dr. Smith visited today.")
            .unwrap();
        assert_eq!(result.sentences_a, vec!["Dr. Smith visited today."]);
    }
}
