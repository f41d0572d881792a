// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Priority-guided random sampling.
//!
//! Each tick generates a chunk of independent uniform random colorings over
//! the session's domain cells, scores each by the component-count product,
//! sorts the chunk ascending by that score, and only then runs the minor
//! evaluator over the sorted chunk. The score reorders evaluation within a
//! batch; it never decides which candidates pass. Attempt numbers are
//! assigned at generation time and survive the sort.
//!
//! There is no natural termination: the search runs until cancelled.

use rand::Rng;

use crate::coloring::{Color, Coloring, NCOLORS};
use crate::components::ComponentCounts;
use crate::matrix::MinorReport;
use crate::search::session::SearchSession;
use crate::search::SearchResult;

struct Candidate {
    attempt: u64,
    coloring: Coloring,
    components: ComponentCounts,
}

/// Generate, order and evaluate one chunk of random candidates.
pub(crate) fn run_chunk(session: &mut SearchSession) {
    let mut batch = Vec::with_capacity(session.chunk_size);
    for _ in 0..session.chunk_size {
        session.generated += 1;
        let mut entries = Vec::with_capacity(session.domain.len());
        for i in 0..session.domain.len() {
            let cell = session.domain[i];
            let digit = session.rng.random_range(0..NCOLORS as u8);
            entries.push((cell, Color::from_digit(digit)));
        }
        let coloring = Coloring::from_entries(entries);
        let components = ComponentCounts::count(&coloring);
        batch.push(Candidate {
            attempt: session.generated,
            coloring,
            components,
        });
    }

    // Stable sort: equal scores keep generation order.
    batch.sort_by_key(|candidate| candidate.components.priority());

    for candidate in batch {
        let report = MinorReport::evaluate_entries(candidate.coloring.entries());
        session.evaluated += 1;
        if report.passes() {
            log::info!(
                "attempt {}: non-degenerate coloring found (priority {})",
                candidate.attempt,
                candidate.components.priority()
            );
            session.results.push(SearchResult::new(
                candidate.coloring,
                report.into_minors(),
                candidate.attempt,
                candidate.components,
            ));
        }
    }
    log::debug!(
        "random chunk done: generated={} evaluated={} found={}",
        session.generated,
        session.evaluated,
        session.found()
    );
}
