// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lattice geometry: cells, orientations, adjacency and shapes.

pub mod cell;
pub mod shape;

pub use cell::{Cell, Orientation};
pub use shape::Shape;
