// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Triangular lattice cells and the adjacency predicate.
//!
//! The lattice is a tiling of the plane by upward- and downward-pointing
//! triangles. A cell is identified by integer coordinates `(x, y)` plus its
//! orientation. Two cells are adjacent exactly when they share an edge:
//!
//! - an upward triangle at `(x, y)` touches the downward triangles at
//!   `(x-1, y)`, `(x+1, y)` and `(x, y-1)`;
//! - a downward triangle at `(x, y)` touches the upward triangles at
//!   `(x-1, y)`, `(x+1, y)` and `(x, y+1)`.
//!
//! Triangles of the same orientation never share an edge, so adjacency is
//! always between opposite orientations. The predicate is symmetric.

use std::cmp::Ordering;
use std::fmt;

/// Orientation of a triangular cell.
///
/// The derived `Ord` puts `Up` before `Down`, which is the tie-break used by
/// the canonical serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    /// Upward-pointing triangle.
    Up,
    /// Downward-pointing triangle.
    Down,
}

/// One triangular tile in the lattice.
///
/// Immutable value type; equality and hashing are by `(x, y, orientation)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
}

impl Cell {
    /// Create an upward-pointing cell at `(x, y)`.
    pub fn up(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            orientation: Orientation::Up,
        }
    }

    /// Create a downward-pointing cell at `(x, y)`.
    pub fn down(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            orientation: Orientation::Down,
        }
    }

    /// Whether this cell points upward.
    pub fn is_up(&self) -> bool {
        self.orientation == Orientation::Up
    }

    /// The three cells sharing an edge with this one.
    ///
    /// Every triangle has exactly three edge-neighbours, all of the opposite
    /// orientation.
    pub fn neighbours(&self) -> [Cell; 3] {
        match self.orientation {
            Orientation::Up => [
                Cell::down(self.x - 1, self.y),
                Cell::down(self.x + 1, self.y),
                Cell::down(self.x, self.y - 1),
            ],
            Orientation::Down => [
                Cell::up(self.x - 1, self.y),
                Cell::up(self.x + 1, self.y),
                Cell::up(self.x, self.y + 1),
            ],
        }
    }

    /// Edge-adjacency predicate.
    ///
    /// Symmetric: `a.adjacent(&b) == b.adjacent(&a)` for all cells.
    pub fn adjacent(&self, other: &Cell) -> bool {
        self.neighbours().contains(other)
    }

    /// Canonical ordering used by the serialization contract:
    /// descending `y`, then ascending `x`, then `Up` before `Down`.
    pub fn canonical_cmp(&self, other: &Cell) -> Ordering {
        other
            .y
            .cmp(&self.y)
            .then(self.x.cmp(&other.x))
            .then(self.orientation.cmp(&other.orientation))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.is_up() { '^' } else { 'v' };
        write!(f, "({},{}){}", self.x, self.y, arrow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_neighbours() {
        let c = Cell::up(0, 0);
        let n = c.neighbours();
        assert!(n.contains(&Cell::down(-1, 0)));
        assert!(n.contains(&Cell::down(1, 0)));
        assert!(n.contains(&Cell::down(0, -1)));
    }

    #[test]
    fn test_down_neighbours() {
        let c = Cell::down(2, 3);
        let n = c.neighbours();
        assert!(n.contains(&Cell::up(1, 3)));
        assert!(n.contains(&Cell::up(3, 3)));
        assert!(n.contains(&Cell::up(2, 4)));
    }

    #[test]
    fn test_same_orientation_never_adjacent() {
        for x in -2..=2 {
            for y in -2..=2 {
                assert!(!Cell::up(0, 0).adjacent(&Cell::up(x, y)));
                assert!(!Cell::down(0, 0).adjacent(&Cell::down(x, y)));
            }
        }
    }

    #[test]
    fn test_adjacency_symmetric() {
        let mut cells = Vec::new();
        for x in -2..=2 {
            for y in -2..=2 {
                cells.push(Cell::up(x, y));
                cells.push(Cell::down(x, y));
            }
        }
        for a in &cells {
            for b in &cells {
                assert_eq!(
                    a.adjacent(b),
                    b.adjacent(a),
                    "adjacency not symmetric for {} / {}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_not_self_adjacent() {
        assert!(!Cell::up(0, 0).adjacent(&Cell::up(0, 0)));
        assert!(!Cell::down(4, -1).adjacent(&Cell::down(4, -1)));
    }

    #[test]
    fn test_canonical_order() {
        // Descending y first, then ascending x, then Up before Down.
        let high = Cell::up(5, 2);
        let low = Cell::up(0, 1);
        assert_eq!(high.canonical_cmp(&low), Ordering::Less);

        let left = Cell::down(0, 0);
        let right = Cell::down(1, 0);
        assert_eq!(left.canonical_cmp(&right), Ordering::Less);

        let up = Cell::up(3, 0);
        let down = Cell::down(3, 0);
        assert_eq!(up.canonical_cmp(&down), Ordering::Less);
    }
}
