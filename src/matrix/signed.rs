// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The signed color-weighted adjacency matrix.
//!
//! Given an ordered list of colored cells, the matrix has one row and column
//! per cell. Off-diagonal entries encode the negated cyclic color difference
//! between adjacent cells; the diagonal accumulates the positive differences
//! so that every row sums to exactly zero.

use crate::coloring::{rel_diff, Color};
use crate::geometry::Cell;

/// N×N integer matrix over the colored cells of a candidate.
///
/// Row/column `i` corresponds to the i-th entry of the list the matrix was
/// built from. Invariant: every row sums to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedMatrix {
    n: usize,
    data: Vec<i64>,
}

impl SignedMatrix {
    /// Build the matrix from an ordered list of colored cells.
    ///
    /// For `i != j`: `M[i][j] = -rel_diff(color_i, color_j)` if the cells are
    /// adjacent, else 0. `M[i][i]` is the sum of `rel_diff(color_i, color_j)`
    /// over all `j` adjacent to `i`.
    ///
    /// Cost is O(N²) adjacency tests, acceptable for the shape sizes the
    /// search targets.
    pub fn build(entries: &[(Cell, Color)]) -> Self {
        let n = entries.len();
        let mut data = vec![0i64; n * n];
        for i in 0..n {
            let (cell_i, color_i) = entries[i];
            let mut diagonal = 0i64;
            for (j, &(cell_j, color_j)) in entries.iter().enumerate() {
                if i == j || !cell_i.adjacent(&cell_j) {
                    continue;
                }
                let diff = rel_diff(color_i, color_j);
                data[i * n + j] = -diff;
                diagonal += diff;
            }
            data[i * n + i] = diagonal;
        }
        Self { n, data }
    }

    /// Matrix dimension N (number of colored cells).
    pub fn n(&self) -> usize {
        self.n
    }

    /// Entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> i64 {
        assert!(i < self.n && j < self.n, "matrix index out of range");
        self.data[i * self.n + j]
    }

    /// Sum of row `i`. Zero for every row by construction.
    pub fn row_sum(&self, i: usize) -> i64 {
        self.data[i * self.n..(i + 1) * self.n].iter().sum()
    }

    /// Dense floating-point copy with row and column `skip` deleted.
    ///
    /// This is the (N-1)×(N-1) input to the determinant engine when
    /// computing the principal minor at `skip`.
    pub fn dense_without(&self, skip: usize) -> Vec<Vec<f64>> {
        assert!(skip < self.n, "minor index out of range");
        let mut rows = Vec::with_capacity(self.n - 1);
        for i in (0..self.n).filter(|&i| i != skip) {
            let row = (0..self.n)
                .filter(|&j| j != skip)
                .map(|j| self.data[i * self.n + j] as f64)
                .collect();
            rows.push(row);
        }
        rows
    }
}
