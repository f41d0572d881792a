// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Determinant engine properties, checked against a naive cofactor
//! reference for small matrices.

mod common;

use common::naive_determinant;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tricolor_search::matrix::determinant;

fn random_matrix(rng: &mut StdRng, n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|_| (0..n).map(|_| rng.random_range(-3..=3) as f64).collect())
        .collect()
}

#[test]
fn test_empty_and_singleton() {
    assert_eq!(determinant(vec![]), 1.0);
    for k in [-5.0, 0.5, 1e-12, 42.0] {
        assert_eq!(determinant(vec![vec![k]]), k);
    }
}

#[test]
fn test_matches_naive_reference() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in 2..=4 {
        for _ in 0..200 {
            let m = random_matrix(&mut rng, n);
            let expected = naive_determinant(&m);
            let actual = determinant(m);
            assert!(
                (actual - expected).abs() < 1e-6,
                "n={}: elimination gave {}, reference gave {}",
                n,
                actual,
                expected
            );
        }
    }
}

#[test]
fn test_row_swap_negates() {
    let mut rng = StdRng::seed_from_u64(11);
    for n in 2..=4 {
        for _ in 0..100 {
            let m = random_matrix(&mut rng, n);
            let i = rng.random_range(0..n);
            let j = rng.random_range(0..n);
            if i == j {
                continue;
            }
            let mut swapped = m.clone();
            swapped.swap(i, j);
            let original = determinant(m);
            let negated = determinant(swapped);
            assert!(
                (original + negated).abs() < 1e-6,
                "swap of rows {} and {} did not negate: {} vs {}",
                i,
                j,
                original,
                negated
            );
        }
    }
}

#[test]
fn test_identity_and_scaling() {
    let identity = vec![
        vec![1.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0],
    ];
    assert!((determinant(identity) - 1.0).abs() < 1e-12);

    let doubled = vec![
        vec![2.0, 0.0, 0.0],
        vec![0.0, 2.0, 0.0],
        vec![0.0, 0.0, 2.0],
    ];
    assert!((determinant(doubled) - 8.0).abs() < 1e-12);
}
