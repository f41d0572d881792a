// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Colorings: partial assignments of colors to cells.
//!
//! A coloring stores only the *colored* cells, in a fixed order. Uncolored
//! cells of a shape simply do not appear: they occupy no matrix row/column
//! and are never traversed during component counting.

use crate::coloring::Color;
use crate::geometry::Cell;

/// A partial function from cells to colors.
///
/// The entry order is significant: the signed matrix indexes rows and columns
/// by it. Search code constructs colorings in shape order; colorings built
/// from wire payloads keep payload order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Coloring {
    entries: Vec<(Cell, Color)>,
}

impl Coloring {
    /// An empty coloring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a coloring from an ordered list of entries.
    ///
    /// The caller guarantees the cells are distinct; search code builds
    /// entries from a [`Shape`](crate::geometry::Shape), whose cells are.
    pub fn from_entries(entries: Vec<(Cell, Color)>) -> Self {
        debug_assert!(
            {
                let mut seen = std::collections::HashSet::new();
                entries.iter().all(|(cell, _)| seen.insert(*cell))
            },
            "coloring entries must be distinct cells"
        );
        Self { entries }
    }

    /// Assign `color` to `cell`, replacing any previous assignment.
    pub fn insert(&mut self, cell: Cell, color: Color) {
        for entry in &mut self.entries {
            if entry.0 == cell {
                entry.1 = color;
                return;
            }
        }
        self.entries.push((cell, color));
    }

    /// Number of colored cells.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no cell is colored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The colored cells and their colors, in entry order.
    pub fn entries(&self) -> &[(Cell, Color)] {
        &self.entries
    }

    /// Look up the color of a cell, `None` if uncolored.
    pub fn color_of(&self, cell: &Cell) -> Option<Color> {
        self.entries
            .iter()
            .find(|(c, _)| c == cell)
            .map(|(_, color)| *color)
    }

    /// Entries sorted into the canonical serialization order.
    pub fn canonical_entries(&self) -> Vec<(Cell, Color)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| a.0.canonical_cmp(&b.0));
        sorted
    }
}
