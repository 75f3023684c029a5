//! Lexical similarity between two documents.
//!
//! Given a reference and a candidate text, this crate reports an overall
//! TF-IDF cosine similarity, which sentences of each document have a close
//! counterpart in the other, and an annotated rendering of both documents
//! with matched sentences marked.
//!
//! ## Pipeline
//!
//! - [`segment`] - Heuristic sentence segmentation behind the [`Segmenter`] trait
//! - [`vector_space`] - TF-IDF vector spaces fit per comparison
//! - [`similarity`] - Cosine similarity and all-pairs matrices
//! - [`matcher`] - Greedy best-match sentence alignment
//! - [`annotate`] - Matched-span markup
//! - [`verdict`] - High / moderate / low classification
//! - [`compare`] - The [`Comparator`] tying the stages together
//!
//! ## Example
//!
//! ```
//! use doc_similarity::{compare, CompareConfig, Verdict};
//!
//! let result = compare(
//!     "The cat sat on the mat. It was sunny.",
//!     "The cat sat on the mat. It rained all day.",
//!     &CompareConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(result.matched_a, vec![true, false]);
//! assert_eq!(result.sentence_match_pct, 50.0);
//! assert_ne!(result.verdict, Verdict::High);
//! ```

pub mod annotate;
pub mod compare;
pub mod config;
pub mod errors;
pub mod matcher;
pub mod segment;
pub mod similarity;
pub mod tokenize;
pub mod vector_space;
pub mod verdict;

pub use annotate::{annotate, MarkStyle};
pub use compare::{
    compare, document_similarity, format_pct, round_pct, Comparator, ComparisonResult, Document,
    RenderedComparison,
};
pub use config::CompareConfig;
pub use errors::{CompareError, CompareResult, DocumentSide, VectorSpaceError};
pub use matcher::{match_flags, MatchOutcome, SentenceMatcher, SentencePair, DEFAULT_THRESHOLD};
pub use segment::{normalize_whitespace, segment, PunctuationSegmenter, Segmenter};
pub use similarity::{cosine, SimilarityMatrix};
pub use tokenize::terms;
pub use vector_space::{ProjectedPair, TermVector, VectorSpace};
pub use verdict::{Verdict, VerdictBands};
