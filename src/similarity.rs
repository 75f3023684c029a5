//! Cosine similarity and all-pairs similarity matrices.

use crate::vector_space::TermVector;

/// Cosine similarity of `u` and `v`, clamped to `[0, 1]`.
///
/// Returns 0 when either vector has zero magnitude.
pub fn cosine(u: &TermVector, v: &TermVector) -> f64 {
    let norms = u.norm() * v.norm();
    if norms == 0.0 {
        return 0.0;
    }
    (u.dot(v) / norms).clamp(0.0, 1.0)
}

/// Row-major `rows × cols` matrix of similarity scores.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Entry `(i, j)` is `cosine(left[i], right[j])`.
    pub fn pairwise(left: &[TermVector], right: &[TermVector]) -> Self {
        let mut values = Vec::with_capacity(left.len() * right.len());
        for u in left {
            for v in right {
                values.push(cosine(u, v));
            }
        }
        Self {
            rows: left.len(),
            cols: right.len(),
            values,
        }
    }

    /// Build a matrix from explicit rows. Returns `None` for ragged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        Some(Self {
            rows: rows.len(),
            cols,
            values: rows.into_iter().flatten().collect(),
        })
    }

    /// An `rows × cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Score at `(row, col)`; `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.values[row * self.cols + col])
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.values[start..start + self.cols])
    }

    /// Column and score of the row maximum. The first maximum wins ties.
    pub fn best_in_row(&self, row: usize) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (col, &score) in self.row(row)?.iter().enumerate() {
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((col, score)),
            }
        }
        best
    }
}
