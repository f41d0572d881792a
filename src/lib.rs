// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for non-degenerate 3-colorings of triangular lattice patches.
//!
//! A *shape* is a fixed ordered set of triangular cells. Each candidate
//! coloring assigns one of three cyclically ordered colors (white, black,
//! gray) to cells of the shape; uncolored cells are excluded entirely. The
//! engine builds a signed color-weighted adjacency matrix over the colored
//! cells, computes all of its principal minors by Gaussian elimination, and
//! accepts a candidate when at least two cells are colored and every minor
//! exceeds a small threshold in magnitude.
//!
//! # Architecture
//!
//! Leaf-first:
//!
//! - [`geometry`] - cells, the adjacency predicate, shapes
//! - [`coloring`] - the three colors, the cyclic difference algebra, partial
//!   colorings
//! - [`matrix`] - signed matrix construction, determinants, principal minors
//! - [`components`] - per-color connected components and the priority score
//! - [`search`] - the chunked, cancellable search controller with its two
//!   strategies (exhaustive enumeration and priority-guided random sampling)
//! - [`codec`] - the JSON wire format for colorings
//!
//! # Search model
//!
//! The controller is driven by explicit ticks: each [`SearchController::step`]
//! call processes one fixed-size chunk of candidates and returns. That makes
//! the engine usable headlessly (a test harness or CLI simply loops over
//! `step`) as well as from a frame callback in an interactive host.
//! Cancellation is cooperative, observed once per chunk boundary.
//!
//! # Example
//!
//! ```
//! use tricolor_search::geometry::{Cell, Shape};
//! use tricolor_search::search::{SearchController, SearchMode, SearchStatus};
//!
//! let shape = Shape::new(vec![Cell::up(0, 0), Cell::down(1, 0)]).unwrap();
//! let mut controller = SearchController::new();
//! controller
//!     .start_search(Some(shape), SearchMode::Exhaustive, None)
//!     .unwrap();
//! while controller.step() == SearchStatus::Running {}
//! let progress = controller.poll();
//! assert_eq!(progress.status, SearchStatus::Completed);
//! assert_eq!(progress.found, 6);
//! ```

pub mod codec;
pub mod coloring;
pub mod components;
pub mod error;
pub mod geometry;
pub mod matrix;
pub mod search;

// Re-export commonly used types
pub use coloring::{rel_diff, Color, Coloring};
pub use components::ComponentCounts;
pub use error::EngineError;
pub use geometry::{Cell, Orientation, Shape};
pub use matrix::{MinorReport, SignedMatrix, NON_DEGENERACY_EPSILON, PIVOT_EPSILON};
pub use search::{
    SearchController, SearchMode, SearchOptions, SearchProgress, SearchResult, SearchStatus,
    SessionHandle,
};
