// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Determinants via Gaussian elimination with partial pivoting.
//!
//! The engine works in floating point. A pivot column whose largest absolute
//! value falls below [`PIVOT_EPSILON`] marks the matrix as singular and the
//! determinant is exactly 0, with no further elimination. This epsilon is a
//! different knob from the non-degeneracy threshold applied to minors
//! downstream; the two must not be conflated.

/// Singularity threshold for pivot selection.
pub const PIVOT_EPSILON: f64 = 1e-10;

/// Compute the determinant of a square matrix, consuming it.
///
/// - `n = 0` returns 1 (empty product);
/// - `n = 1` returns the sole entry, however small;
/// - otherwise runs elimination with partial pivoting, accumulating the
///   product of pivots and a sign flip per row swap.
///
/// # Panics
///
/// Panics if the rows are not all of length `n`.
pub fn determinant(mut m: Vec<Vec<f64>>) -> f64 {
    let n = m.len();
    assert!(
        m.iter().all(|row| row.len() == n),
        "determinant requires a square matrix"
    );
    if n == 0 {
        return 1.0;
    }
    if n == 1 {
        return m[0][0];
    }

    let mut det = 1.0;
    for col in 0..n {
        // Partial pivoting: largest absolute value from the pivot row down.
        let mut pivot_row = col;
        let mut pivot_abs = m[col][col].abs();
        for row in col + 1..n {
            let abs = m[row][col].abs();
            if abs > pivot_abs {
                pivot_row = row;
                pivot_abs = abs;
            }
        }
        if pivot_abs < PIVOT_EPSILON {
            // Singular: the determinant is exactly 0.
            return 0.0;
        }
        if pivot_row != col {
            m.swap(col, pivot_row);
            det = -det;
        }
        let pivot = m[col][col];
        det *= pivot;
        for row in col + 1..n {
            let factor = m[row][col] / pivot;
            if factor != 0.0 {
                for k in col..n {
                    let delta = factor * m[col][k];
                    m[row][k] -= delta;
                }
            }
        }
    }
    det
}
