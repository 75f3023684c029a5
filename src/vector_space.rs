//! TF-IDF vector space.
//!
//! A [`VectorSpace`] is fit over a set of strings and projects strings onto
//! its vocabulary. Vectors are only comparable with vectors projected by the
//! same space; [`ProjectedPair`] keeps the space and both projected lists
//! together so they cannot drift apart.
//!
//! Weights follow the smoothed formulation:
//! `tf(t, s) * (ln((1 + n) / (1 + df(t))) + 1)`, L2-normalized per string.

use std::collections::{BTreeMap, BTreeSet};

use crate::errors::VectorSpaceError;
use crate::similarity::SimilarityMatrix;
use crate::tokenize::terms;

/// A sparse, non-negative term vector.
///
/// Entries are `(term index, weight)` pairs sorted by term index, with zero
/// weights omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    entries: Vec<(usize, f64)>,
}

impl TermVector {
    /// Build a vector from raw `(index, weight)` pairs.
    ///
    /// Pairs are sorted, duplicate indexes are summed and zero weights dropped.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (usize, f64)>) -> Self {
        let mut merged: BTreeMap<usize, f64> = BTreeMap::new();
        for (index, weight) in pairs {
            *merged.entry(index).or_insert(0.0) += weight;
        }
        Self {
            entries: merged.into_iter().filter(|(_, w)| *w != 0.0).collect(),
        }
    }

    /// Same as [`TermVector::from_pairs`], scaled to unit length.
    pub fn normalized(pairs: impl IntoIterator<Item = (usize, f64)>) -> Self {
        let mut vector = Self::from_pairs(pairs);
        let norm = vector.norm();
        if norm > 0.0 {
            for (_, weight) in vector.entries.iter_mut() {
                *weight /= norm;
            }
        }
        vector
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight of term `index`, zero when absent.
    pub fn weight(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |(i, _)| *i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Sparse dot product (merge over sorted indexes).
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ia, wa) = self.entries[i];
            let (ib, wb) = other.entries[j];
            if ia == ib {
                sum += wa * wb;
                i += 1;
                j += 1;
            } else if ia < ib {
                i += 1;
            } else {
                j += 1;
            }
        }
        sum
    }
}

/// Vocabulary and inverse document frequencies fit over a string set.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    documents: usize,
}

impl VectorSpace {
    /// Fit a space over `strings`.
    ///
    /// Fails with [`VectorSpaceError::DegenerateVocabulary`] when no string
    /// yields a term (empty, whitespace or symbol-only input).
    pub fn fit<S: AsRef<str>>(strings: &[S]) -> Result<Self, VectorSpaceError> {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for string in strings {
            let unique: BTreeSet<String> = terms(string.as_ref()).into_iter().collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(VectorSpaceError::DegenerateVocabulary);
        }

        let n = strings.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (index, (term, df)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        tracing::trace!(
            documents = strings.len(),
            terms = vocabulary.len(),
            "fit vector space"
        );

        Ok(Self {
            vocabulary,
            idf,
            documents: strings.len(),
        })
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Number of strings the space was fit on.
    pub fn documents(&self) -> usize {
        self.documents
    }

    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|index| self.idf[index])
    }

    /// Project each string onto this space. Unknown terms are ignored.
    pub fn project<S: AsRef<str>>(&self, strings: &[S]) -> Vec<TermVector> {
        strings
            .iter()
            .map(|string| self.project_one(string.as_ref()))
            .collect()
    }

    pub fn project_one(&self, text: &str) -> TermVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in terms(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }
        TermVector::normalized(
            counts
                .into_iter()
                .map(|(index, count)| (index, count * self.idf[index])),
        )
    }
}

/// A space fit jointly over two string lists, with both lists projected.
#[derive(Debug, Clone)]
pub struct ProjectedPair {
    space: VectorSpace,
    left: Vec<TermVector>,
    right: Vec<TermVector>,
}

impl ProjectedPair {
    /// Fit one space over `left + right` and project both lists into it.
    pub fn fit<A: AsRef<str>, B: AsRef<str>>(
        left: &[A],
        right: &[B],
    ) -> Result<Self, VectorSpaceError> {
        let corpus: Vec<&str> = left
            .iter()
            .map(AsRef::as_ref)
            .chain(right.iter().map(AsRef::as_ref))
            .collect();
        let space = VectorSpace::fit(&corpus)?;
        let left = space.project(left);
        let right = space.project(right);
        Ok(Self { space, left, right })
    }

    pub fn space(&self) -> &VectorSpace {
        &self.space
    }

    pub fn left(&self) -> &[TermVector] {
        &self.left
    }

    pub fn right(&self) -> &[TermVector] {
        &self.right
    }

    /// All-pairs cosine similarity, `left.len() × right.len()`.
    pub fn similarity_matrix(&self) -> SimilarityMatrix {
        SimilarityMatrix::pairwise(&self.left, &self.right)
    }
}
