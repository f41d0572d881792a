// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Principal minors and the non-degeneracy predicate.
//!
//! For an N×N signed matrix, minor `i` is the determinant of the matrix with
//! row `i` and column `i` deleted. A candidate coloring passes iff it has at
//! least two colored cells and every minor's absolute value exceeds
//! [`NON_DEGENERACY_EPSILON`]. With N ≤ 1 the minor list is empty and the
//! candidate can never pass: there is nothing to test.

use crate::coloring::Color;
use crate::geometry::Cell;
use crate::matrix::determinant::determinant;
use crate::matrix::SignedMatrix;

/// Acceptance threshold on the absolute value of each minor.
///
/// Independent of [`PIVOT_EPSILON`](crate::matrix::PIVOT_EPSILON), which
/// governs singularity during elimination.
pub const NON_DEGENERACY_EPSILON: f64 = 1e-4;

/// All principal minors of one candidate, with the pass/fail verdict.
#[derive(Debug, Clone)]
pub struct MinorReport {
    minors: Vec<(usize, f64)>,
}

impl MinorReport {
    /// Compute every principal minor of `matrix`.
    ///
    /// Returns an empty report when N ≤ 1.
    pub fn evaluate(matrix: &SignedMatrix) -> Self {
        let n = matrix.n();
        if n <= 1 {
            return Self { minors: Vec::new() };
        }
        let minors = (0..n)
            .map(|i| (i, determinant(matrix.dense_without(i))))
            .collect();
        Self { minors }
    }

    /// Build the signed matrix for `entries` and evaluate its minors.
    pub fn evaluate_entries(entries: &[(Cell, Color)]) -> Self {
        Self::evaluate(&SignedMatrix::build(entries))
    }

    /// The `(index, minor value)` pairs, one per matrix row.
    pub fn minors(&self) -> &[(usize, f64)] {
        &self.minors
    }

    /// The non-degeneracy predicate: at least two colored cells, and every
    /// minor strictly larger than [`NON_DEGENERACY_EPSILON`] in magnitude.
    pub fn passes(&self) -> bool {
        !self.minors.is_empty()
            && self
                .minors
                .iter()
                .all(|&(_, value)| value.abs() > NON_DEGENERACY_EPSILON)
    }

    /// Consume the report, yielding the minor list for storage in a result.
    pub fn into_minors(self) -> Vec<(usize, f64)> {
        self.minors
    }
}
