// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Engine error taxonomy.
//!
//! Degenerate shapes, singular matrices and cancellation are *not* errors:
//! the first two fall out of the pass predicate naturally, and cancellation
//! is a first-class terminal status. Errors here are precondition failures
//! reported before any state mutation, plus atomic import rejection.

use thiserror::Error;

use crate::geometry::Cell;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A start request with no shape and no colored cells to derive one from.
    #[error("no shape available: save a shape or color at least one cell first")]
    NoShape,

    /// The exhaustive index space 3^N does not fit the enumeration cursor.
    #[error("shape of {0} cells is too large for exhaustive enumeration")]
    ShapeTooLarge(usize),

    /// The same cell appeared twice while constructing a shape.
    #[error("duplicate cell in shape: {0}")]
    DuplicateCell(Cell),

    /// A seed coloring referenced a cell outside the search shape.
    #[error("coloring references a cell outside the shape: {0}")]
    CellOutsideShape(Cell),

    /// An import payload that could not be parsed at all. Rejected as a
    /// whole; no partial coloring is ever applied.
    #[error("malformed coloring payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}
