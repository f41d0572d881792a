// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Signed matrix construction, determinants, and principal minors.

pub mod determinant;
pub mod minors;
pub mod signed;

pub use determinant::{determinant, PIVOT_EPSILON};
pub use minors::{MinorReport, NON_DEGENERACY_EPSILON};
pub use signed::SignedMatrix;
