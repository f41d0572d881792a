// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shapes: the fixed search domain for one session.
//!
//! A [`Shape`] is an ordered collection of distinct cells. The order matters:
//! exhaustive search identifies colorings with base-3 integers whose i-th
//! digit colors the i-th cell of the shape, so the shape must stay immutable
//! for the duration of a search run.

use std::collections::HashSet;

use crate::coloring::Coloring;
use crate::error::EngineError;
use crate::geometry::Cell;

/// An ordered set of distinct cells defining the search domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    cells: Vec<Cell>,
    index: HashSet<Cell>,
}

impl Shape {
    /// Create a shape from an ordered list of cells.
    ///
    /// Returns [`EngineError::DuplicateCell`] if the same cell appears twice.
    pub fn new(cells: Vec<Cell>) -> Result<Self, EngineError> {
        let mut index = HashSet::with_capacity(cells.len());
        for cell in &cells {
            if !index.insert(*cell) {
                return Err(EngineError::DuplicateCell(*cell));
            }
        }
        Ok(Self { cells, index })
    }

    /// Derive a shape from the colored cells of a coloring, in coloring order.
    ///
    /// Used when a search is started without an explicitly saved shape.
    pub fn from_coloring(coloring: &Coloring) -> Self {
        let cells: Vec<Cell> = coloring.entries().iter().map(|(cell, _)| *cell).collect();
        let index = cells.iter().copied().collect();
        Self { cells, index }
    }

    /// Number of cells in the shape.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the shape has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells in their fixed order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Membership test.
    pub fn contains(&self, cell: &Cell) -> bool {
        self.index.contains(cell)
    }
}
