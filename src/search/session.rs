// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search session state: status, counters, cancellation, timing.
//!
//! Exactly one session is active at a time. Its mutable state is owned
//! exclusively by the chunk currently executing; the host must never drive
//! two chunks of the same session concurrently. The cancellation token is
//! owned by the session and handed to the caller in the session handle,
//! never held as ambient or global state. It is read only at chunk
//! boundaries, so at most one chunk of extra work runs after a cancel
//! request.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::geometry::{Cell, Shape};
use crate::search::SearchResult;

/// Default number of candidates processed per tick.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Lifecycle status of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// No session exists.
    Idle,
    /// A session is active and will advance on the next tick.
    Running,
    /// Exhaustive search processed all 3^N indices.
    Completed,
    /// The session observed its cancellation token at a chunk boundary.
    /// Results found before cancellation are preserved.
    Cancelled,
}

/// Search strategy, selected at start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Enumerate every one of the 3^N colorings of the shape, in index
    /// order. Complete but exponential in N.
    Exhaustive,
    /// Draw uniform random colorings of the currently-colored cells forever,
    /// evaluating each chunk in ascending priority-score order. Terminates
    /// only by cancellation.
    Randomized,
}

/// Cooperative cancellation signal.
///
/// Cloned into the session handle; setting it requests that the controller
/// stop at the next chunk boundary.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Tunable parameters for one search session.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Candidates per tick. The chunk is the cancellation granularity.
    pub chunk_size: usize,
    /// Explicit RNG seed for randomized mode; `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            rng_seed: None,
        }
    }
}

/// Mutable state of one search run.
///
/// Created by the controller when a search starts, mutated only during chunk
/// execution, and superseded when a new search starts.
#[derive(Debug)]
pub struct SearchSession {
    pub(crate) shape: Shape,
    pub(crate) mode: SearchMode,
    pub(crate) status: SearchStatus,
    /// Cells receiving a color in each candidate. All shape cells in
    /// exhaustive mode; the seed coloring's cells in randomized mode.
    pub(crate) domain: Vec<Cell>,
    /// Next exhaustive index to process (unused in randomized mode).
    pub(crate) next_index: u128,
    /// 3^N for exhaustive mode, `None` for randomized.
    pub(crate) total: Option<u128>,
    pub(crate) generated: u64,
    pub(crate) evaluated: u64,
    pub(crate) results: Vec<SearchResult>,
    pub(crate) token: CancelToken,
    pub(crate) rng: StdRng,
    pub(crate) chunk_size: usize,
    started: Instant,
    finished: Option<Duration>,
}

impl SearchSession {
    pub(crate) fn new(
        shape: Shape,
        mode: SearchMode,
        domain: Vec<Cell>,
        total: Option<u128>,
        options: &SearchOptions,
    ) -> Self {
        let rng = match options.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            shape,
            mode,
            status: SearchStatus::Running,
            domain,
            next_index: 0,
            total,
            generated: 0,
            evaluated: 0,
            results: Vec::new(),
            token: CancelToken::new(),
            rng,
            chunk_size: options.chunk_size.max(1),
            started: Instant::now(),
            finished: None,
        }
    }

    /// Number of results found so far.
    pub(crate) fn found(&self) -> u64 {
        self.results.len() as u64
    }

    /// Wall-clock time since start, frozen at the terminal transition.
    pub(crate) fn elapsed(&self) -> Duration {
        match self.finished {
            Some(duration) => duration,
            None => self.started.elapsed(),
        }
    }

    /// Transition to a terminal status and freeze the clock.
    pub(crate) fn finish(&mut self, status: SearchStatus) {
        debug_assert!(matches!(
            status,
            SearchStatus::Completed | SearchStatus::Cancelled
        ));
        self.status = status;
        self.finished = Some(self.started.elapsed());
        log::info!(
            "search {:?}: generated={} evaluated={} found={} in {:?}",
            status,
            self.generated,
            self.evaluated,
            self.found(),
            self.elapsed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_token() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_default_options() {
        let options = SearchOptions::default();
        assert_eq!(options.chunk_size, DEFAULT_CHUNK_SIZE);
        assert!(options.rng_seed.is_none());
    }
}
