// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive enumeration of all 3^N colorings.
//!
//! Candidates are bijective with integers in `[0, 3^N)` via base-3 digit
//! expansion: digit `i` of the index (least-significant first), plus one, is
//! the color of the i-th cell of the shape. Enumeration is complete (every
//! non-degenerate coloring of the shape is found) at a cost exponential in
//! N, which is a documented limitation rather than a defect.

use crate::coloring::{Color, Coloring};
use crate::components::ComponentCounts;
use crate::geometry::Shape;
use crate::matrix::MinorReport;
use crate::search::session::{SearchSession, SearchStatus};
use crate::search::SearchResult;

/// Decode exhaustive index `index` into the coloring it denotes.
///
/// Digit i (least-significant first) colors cell i of the shape.
pub(crate) fn decode_coloring(shape: &Shape, index: u128) -> Coloring {
    let mut remainder = index;
    let entries = shape
        .cells()
        .iter()
        .map(|&cell| {
            let digit = (remainder % 3) as u8;
            remainder /= 3;
            (cell, Color::from_digit(digit))
        })
        .collect();
    Coloring::from_entries(entries)
}

/// Process one chunk of indices; transitions to `Completed` after the last.
pub(crate) fn run_chunk(session: &mut SearchSession) {
    let total = session
        .total
        .expect("exhaustive session always has a total");
    let end = session
        .next_index
        .saturating_add(session.chunk_size as u128)
        .min(total);

    for index in session.next_index..end {
        let coloring = decode_coloring(&session.shape, index);
        session.generated += 1;
        let report = MinorReport::evaluate_entries(coloring.entries());
        session.evaluated += 1;
        if report.passes() {
            let components = ComponentCounts::count(&coloring);
            let attempt = (index + 1) as u64;
            log::info!("attempt {}: non-degenerate coloring found", attempt);
            session.results.push(SearchResult::new(
                coloring,
                report.into_minors(),
                attempt,
                components,
            ));
        }
    }
    session.next_index = end;
    log::debug!(
        "exhaustive chunk done: {}/{} indices, found={}",
        session.next_index,
        total,
        session.found()
    );

    if session.next_index == total {
        session.finish(SearchStatus::Completed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Cell;

    #[test]
    fn test_decode_index_zero_is_all_white() {
        let shape = Shape::new(vec![Cell::up(0, 0), Cell::down(1, 0)]).unwrap();
        let coloring = decode_coloring(&shape, 0);
        assert!(coloring
            .entries()
            .iter()
            .all(|&(_, color)| color == Color::White));
    }

    #[test]
    fn test_decode_least_significant_digit_first() {
        let shape = Shape::new(vec![Cell::up(0, 0), Cell::down(1, 0)]).unwrap();
        // index 5 = 2 + 1*3: digit 0 is 2 (gray), digit 1 is 1 (black).
        let coloring = decode_coloring(&shape, 5);
        assert_eq!(coloring.entries()[0].1, Color::Gray);
        assert_eq!(coloring.entries()[1].1, Color::Black);
    }

    #[test]
    fn test_decode_covers_all_indices_distinctly() {
        let shape =
            Shape::new(vec![Cell::up(0, 0), Cell::down(1, 0), Cell::up(2, 0)]).unwrap();
        let mut seen = std::collections::HashSet::new();
        for index in 0..27u128 {
            let coloring = decode_coloring(&shape, index);
            let digits: Vec<u8> = coloring.entries().iter().map(|e| e.1.value()).collect();
            assert!(seen.insert(digits), "index {} duplicated a coloring", index);
        }
        assert_eq!(seen.len(), 27);
    }
}
