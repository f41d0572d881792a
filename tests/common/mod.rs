// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use tricolor_search::geometry::{Cell, Shape};

/// A path-shaped patch: n cells along the x axis, alternating orientation,
/// each adjacent to the next.
pub fn strip(n: usize) -> Shape {
    let cells = (0..n)
        .map(|i| {
            if i % 2 == 0 {
                Cell::up(i as i32, 0)
            } else {
                Cell::down(i as i32, 0)
            }
        })
        .collect();
    Shape::new(cells).expect("strip cells are distinct")
}

/// Reference determinant by cofactor expansion. Only suitable for small n.
pub fn naive_determinant(m: &[Vec<f64>]) -> f64 {
    let n = m.len();
    if n == 0 {
        return 1.0;
    }
    if n == 1 {
        return m[0][0];
    }
    let mut det = 0.0;
    for col in 0..n {
        let minor: Vec<Vec<f64>> = m[1..]
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(j, _)| j != col)
                    .map(|(_, &value)| value)
                    .collect()
            })
            .collect();
        let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
        det += sign * m[0][col] * naive_determinant(&minor);
    }
    det
}
