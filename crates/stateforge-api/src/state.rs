//! Shared application state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use stateforge_core::solution_validity::SolutionValidityTracker;
use stateforge_solution_validity::in_memory::InMemorySolutionValidity;
use stateforge_state_editor::domain::session::StateEditorSession;

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The editing session. The mutex serialises writers.
    pub session: Arc<Mutex<StateEditorSession>>,
    /// Validity cache written by the solution validator and read by the
    /// session.
    pub solution_validity: Arc<InMemorySolutionValidity>,
}

impl AppState {
    /// Create new application state around a fresh session.
    #[must_use]
    pub fn new(solution_validity: Arc<InMemorySolutionValidity>) -> Self {
        let tracker: Arc<dyn SolutionValidityTracker> = solution_validity.clone();
        Self {
            session: Arc::new(Mutex::new(StateEditorSession::new(tracker))),
            solution_validity,
        }
    }

    /// Locks the session. Session writes are single assignments, so a
    /// poisoned lock still guards a consistent session.
    pub fn session(&self) -> MutexGuard<'_, StateEditorSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemorySolutionValidity::new()))
    }
}
