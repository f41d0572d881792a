// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search results and progress snapshots.

use std::time::Duration;

use crate::coloring::Coloring;
use crate::components::ComponentCounts;
use crate::search::SearchStatus;

/// One coloring that passed the non-degeneracy predicate.
///
/// Immutable once stored; owned by the controller's result list until the
/// caller consumes a snapshot.
#[derive(Debug, Clone)]
pub struct SearchResult {
    coloring: Coloring,
    minors: Vec<(usize, f64)>,
    attempt: u64,
    components: ComponentCounts,
}

impl SearchResult {
    pub(crate) fn new(
        coloring: Coloring,
        minors: Vec<(usize, f64)>,
        attempt: u64,
        components: ComponentCounts,
    ) -> Self {
        Self {
            coloring,
            minors,
            attempt,
            components,
        }
    }

    /// The stored coloring snapshot.
    pub fn coloring(&self) -> &Coloring {
        &self.coloring
    }

    /// Materialize the coloring for re-display. Pure projection, no
    /// engine-side effect.
    pub fn apply(&self) -> Coloring {
        self.coloring.clone()
    }

    /// The full `(index, minor value)` list of the passing candidate.
    pub fn minors(&self) -> &[(usize, f64)] {
        &self.minors
    }

    /// 1-based discovery attempt number, in generation order.
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Per-color connected-component counts.
    pub fn components(&self) -> ComponentCounts {
        self.components
    }
}

/// Live view of a session, produced by `poll`.
#[derive(Debug, Clone)]
pub struct SearchProgress<'a> {
    pub status: SearchStatus,
    /// Candidates generated so far.
    pub generated: u64,
    /// Candidates run through the minor evaluator so far.
    pub evaluated: u64,
    /// Candidates that passed.
    pub found: u64,
    /// All results accumulated so far, in discovery order.
    pub results: &'a [SearchResult],
    /// Wall-clock time since the session started.
    pub elapsed: Duration,
}
