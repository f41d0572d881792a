// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-color connected components and the priority score.
//!
//! For each color class independently, cells sharing that color are grouped
//! into maximal connected components under the lattice adjacency predicate.
//! The flood fill is iterative with an explicit stack, so large shapes cannot
//! hit a recursion depth limit. The resulting counts are independent of the
//! iteration order of the input coloring.
//!
//! The product of the three counts is the priority score for randomized
//! search: a lower product suggests one or more colors form large contiguous
//! regions. It is an unproven ordering heuristic only, never a filter, and
//! has no bearing on which candidates pass.

use std::collections::{HashMap, HashSet};

use crate::coloring::{Color, Coloring};

/// Connected-component counts per color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComponentCounts {
    pub white: u32,
    pub black: u32,
    pub gray: u32,
}

impl ComponentCounts {
    /// Count the connected components of each color class of `coloring`.
    ///
    /// Uncolored cells are not traversed; two same-colored cells belong to
    /// one component iff they are linked by a chain of adjacent cells of
    /// that color.
    pub fn count(coloring: &Coloring) -> Self {
        let colors: HashMap<_, _> = coloring.entries().iter().copied().collect();
        let mut visited = HashSet::with_capacity(colors.len());
        let mut counts = ComponentCounts::default();
        let mut stack = Vec::new();

        for &(cell, color) in coloring.entries() {
            if !visited.insert(cell) {
                continue;
            }
            // New component: flood fill with an explicit stack.
            stack.push(cell);
            while let Some(current) = stack.pop() {
                for neighbour in current.neighbours() {
                    if colors.get(&neighbour) == Some(&color) && visited.insert(neighbour) {
                        stack.push(neighbour);
                    }
                }
            }
            counts.bump(color);
        }
        counts
    }

    fn bump(&mut self, color: Color) {
        match color {
            Color::White => self.white += 1,
            Color::Black => self.black += 1,
            Color::Gray => self.gray += 1,
        }
    }

    /// The count for one color.
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
            Color::Gray => self.gray,
        }
    }

    /// Priority score: `white × black × gray`.
    ///
    /// Lower scores are evaluated first in randomized search.
    pub fn priority(&self) -> u64 {
        self.white as u64 * self.black as u64 * self.gray as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Cell;

    fn coloring_of(entries: &[(Cell, Color)]) -> Coloring {
        Coloring::from_entries(entries.to_vec())
    }

    #[test]
    fn test_two_adjacent_distinct_colors() {
        let counts = ComponentCounts::count(&coloring_of(&[
            (Cell::up(0, 0), Color::White),
            (Cell::down(1, 0), Color::Black),
        ]));
        assert_eq!(
            counts,
            ComponentCounts {
                white: 1,
                black: 1,
                gray: 0
            }
        );
    }

    #[test]
    fn test_adjacent_same_color_merge() {
        // Up(0,0) - Down(1,0) - Up(2,0) is a path; all white is one component.
        let counts = ComponentCounts::count(&coloring_of(&[
            (Cell::up(0, 0), Color::White),
            (Cell::down(1, 0), Color::White),
            (Cell::up(2, 0), Color::White),
        ]));
        assert_eq!(counts.white, 1);
    }

    #[test]
    fn test_same_color_split_by_other_color() {
        let counts = ComponentCounts::count(&coloring_of(&[
            (Cell::up(0, 0), Color::White),
            (Cell::down(1, 0), Color::Gray),
            (Cell::up(2, 0), Color::White),
        ]));
        assert_eq!(counts.white, 2);
        assert_eq!(counts.gray, 1);
    }

    #[test]
    fn test_uncolored_gap_is_not_traversed() {
        // Only the two endpoints of the path are colored; the middle cell is
        // absent from the coloring, so the whites do not connect.
        let counts = ComponentCounts::count(&coloring_of(&[
            (Cell::up(0, 0), Color::White),
            (Cell::up(2, 0), Color::White),
        ]));
        assert_eq!(counts.white, 2);
    }

    #[test]
    fn test_order_independent() {
        let entries = [
            (Cell::up(0, 0), Color::White),
            (Cell::down(1, 0), Color::White),
            (Cell::up(2, 0), Color::Black),
            (Cell::down(3, 0), Color::Black),
            (Cell::up(4, 0), Color::Gray),
        ];
        let forward = ComponentCounts::count(&coloring_of(&entries));
        let mut reversed = entries;
        reversed.reverse();
        let backward = ComponentCounts::count(&coloring_of(&reversed));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_priority_product() {
        let counts = ComponentCounts {
            white: 2,
            black: 3,
            gray: 4,
        };
        assert_eq!(counts.priority(), 24);
        // A missing color zeroes the product.
        let counts = ComponentCounts {
            white: 2,
            black: 3,
            gray: 0,
        };
        assert_eq!(counts.priority(), 0);
    }
}
