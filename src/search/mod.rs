// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The search controller.
//!
//! Orchestrates exhaustive or randomized search as a cancellable, chunked,
//! resumable process. The controller is host-agnostic: it advances exactly
//! one chunk per [`SearchController::step`] call, so it can be driven by a
//! frame callback interactively or by a synchronous loop in a test harness.
//!
//! # Lifecycle
//!
//! `Idle → Running → {Completed, Cancelled}`. `Running` is only reachable
//! with a non-empty shape; a start request that can produce no shape is a
//! precondition failure and creates no session. Starting while a session is
//! `Running` atomically cancels and replaces it.
//!
//! # Concurrency
//!
//! Single-threaded and cooperative. Each chunk runs to completion without
//! preemption; the cancellation token is read once per chunk boundary, so a
//! cancel request costs at most one extra chunk of work. Long exhaustive
//! runs over large shapes are the caller's responsibility to bound.

pub mod exhaustive;
pub mod random;
pub mod result;
pub mod session;

pub use result::{SearchProgress, SearchResult};
pub use session::{
    CancelToken, SearchMode, SearchOptions, SearchSession, SearchStatus, DEFAULT_CHUNK_SIZE,
};

use std::time::Duration;

use crate::coloring::Coloring;
use crate::error::EngineError;
use crate::geometry::{Cell, Shape};

/// Handle to a started session, held by the caller.
///
/// Carries the session's cancellation token; dropping the handle does not
/// affect the search.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    token: CancelToken,
}

impl SessionHandle {
    /// Request cooperative cancellation of the session this handle came from.
    pub fn cancel(&self) {
        self.token.cancel();
    }
}

/// Owns the active session and the saved shape.
#[derive(Debug, Default)]
pub struct SearchController {
    saved_shape: Option<Shape>,
    session: Option<SearchSession>,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicitly save a shape for reuse by later start requests.
    pub fn save_shape(&mut self, shape: Shape) {
        self.saved_shape = Some(shape);
    }

    /// The shape the controller would reuse, if any.
    pub fn saved_shape(&self) -> Option<&Shape> {
        self.saved_shape.as_ref()
    }

    /// Start a search with default options.
    ///
    /// See [`SearchController::start_search_with`].
    pub fn start_search(
        &mut self,
        shape: Option<Shape>,
        mode: SearchMode,
        seed: Option<&Coloring>,
    ) -> Result<SessionHandle, EngineError> {
        self.start_search_with(shape, mode, seed, SearchOptions::default())
    }

    /// Start a search.
    ///
    /// The shape is taken from the request, falling back to the saved shape,
    /// falling back to one derived from the seed coloring's colored cells.
    /// Whichever shape is used is persisted for later requests. In
    /// randomized mode the seed coloring restricts the colored domain: only
    /// its cells receive colors, all other shape cells stay uncolored.
    ///
    /// Errors are precondition failures reported before any state mutation:
    /// no session is created and the previous one, if any, keeps running.
    pub fn start_search_with(
        &mut self,
        shape: Option<Shape>,
        mode: SearchMode,
        seed: Option<&Coloring>,
        options: SearchOptions,
    ) -> Result<SessionHandle, EngineError> {
        let shape = match shape {
            Some(shape) => shape,
            None => match (&self.saved_shape, seed) {
                (Some(saved), _) => saved.clone(),
                (None, Some(coloring)) if !coloring.is_empty() => Shape::from_coloring(coloring),
                _ => return Err(EngineError::NoShape),
            },
        };
        if shape.is_empty() {
            return Err(EngineError::NoShape);
        }
        if let Some(coloring) = seed {
            for (cell, _) in coloring.entries() {
                if !shape.contains(cell) {
                    return Err(EngineError::CellOutsideShape(*cell));
                }
            }
        }

        let (domain, total) = match mode {
            SearchMode::Exhaustive => {
                let total = (crate::coloring::NCOLORS as u128)
                    .checked_pow(shape.len() as u32)
                    .ok_or(EngineError::ShapeTooLarge(shape.len()))?;
                (shape.cells().to_vec(), Some(total))
            }
            SearchMode::Randomized => (Self::colored_domain(&shape, seed), None),
        };

        // All preconditions hold: tear down any running session and replace it.
        if let Some(previous) = self.session.take() {
            if previous.status == SearchStatus::Running {
                log::warn!("superseding a running search session");
                previous.token.cancel();
            }
        }

        log::info!(
            "starting {:?} search: {} shape cells, {} domain cells{}",
            mode,
            shape.len(),
            domain.len(),
            match total {
                Some(total) => format!(", {} candidates", total),
                None => String::new(),
            }
        );
        self.saved_shape = Some(shape.clone());
        let session = SearchSession::new(shape, mode, domain, total, &options);
        let handle = SessionHandle {
            token: session.token.clone(),
        };
        self.session = Some(session);
        Ok(handle)
    }

    /// The shape cells colored by the seed, in shape order; the whole shape
    /// when no seed is given.
    fn colored_domain(shape: &Shape, seed: Option<&Coloring>) -> Vec<Cell> {
        match seed {
            None => shape.cells().to_vec(),
            Some(coloring) => shape
                .cells()
                .iter()
                .filter(|cell| coloring.color_of(cell).is_some())
                .copied()
                .collect(),
        }
    }

    /// Request cancellation of the active session, if any.
    pub fn cancel(&self) {
        if let Some(session) = &self.session {
            session.token.cancel();
        }
    }

    /// Advance the active session by one chunk and return its status.
    ///
    /// The cancellation token is observed here, at the chunk boundary,
    /// before any further work. Stepping a terminal or absent session is a
    /// no-op.
    pub fn step(&mut self) -> SearchStatus {
        let Some(session) = &mut self.session else {
            return SearchStatus::Idle;
        };
        if session.status != SearchStatus::Running {
            return session.status;
        }
        if session.token.is_cancelled() {
            session.finish(SearchStatus::Cancelled);
            return session.status;
        }
        match session.mode {
            SearchMode::Exhaustive => exhaustive::run_chunk(session),
            SearchMode::Randomized => random::run_chunk(session),
        }
        session.status
    }

    /// Step until the session reaches a terminal status, at most `max_steps`
    /// chunks. Returns the status after the last step.
    ///
    /// Randomized searches have no natural termination, so a bound is
    /// required; the engine never imposes one silently.
    pub fn step_many(&mut self, max_steps: u64) -> SearchStatus {
        let mut status = self.status();
        for _ in 0..max_steps {
            if status != SearchStatus::Running {
                break;
            }
            status = self.step();
        }
        status
    }

    /// Current status without advancing anything.
    pub fn status(&self) -> SearchStatus {
        match &self.session {
            None => SearchStatus::Idle,
            Some(session) => session.status,
        }
    }

    /// Snapshot of the active session's counters and results.
    pub fn poll(&self) -> SearchProgress<'_> {
        match &self.session {
            None => SearchProgress {
                status: SearchStatus::Idle,
                generated: 0,
                evaluated: 0,
                found: 0,
                results: &[],
                elapsed: Duration::ZERO,
            },
            Some(session) => SearchProgress {
                status: session.status,
                generated: session.generated,
                evaluated: session.evaluated,
                found: session.found(),
                results: &session.results,
                elapsed: session.elapsed(),
            },
        }
    }
}
