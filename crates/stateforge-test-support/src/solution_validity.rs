//! Test trackers — mock `SolutionValidityTracker` implementations for tests.

use std::collections::BTreeSet;
use std::sync::Mutex;

use stateforge_core::solution_validity::SolutionValidityTracker;

/// A tracker that records every state name it is asked about. Reports a
/// solution as valid only for the configured state names.
#[derive(Debug, Default)]
pub struct RecordingSolutionValidity {
    valid_states: BTreeSet<String>,
    queried: Mutex<Vec<String>>,
    deleted: Mutex<Vec<String>>,
}

impl RecordingSolutionValidity {
    /// Create a new recording tracker that answers `true` for `valid_states`
    /// and `false` for everything else.
    #[must_use]
    pub fn new(valid_states: &[&str]) -> Self {
        Self {
            valid_states: valid_states.iter().map(|s| (*s).to_owned()).collect(),
            queried: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    /// Returns the state names passed to `is_solution_valid`, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn queried_states(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }

    /// Returns the state names passed to `delete_solution_validity`, in call
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn deleted_states(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

impl SolutionValidityTracker for RecordingSolutionValidity {
    fn is_solution_valid(&self, state_name: &str) -> bool {
        self.queried.lock().unwrap().push(state_name.to_owned());
        self.valid_states.contains(state_name)
    }

    fn delete_solution_validity(&self, state_name: &str) {
        self.deleted.lock().unwrap().push(state_name.to_owned());
    }
}

/// A tracker that gives the same answer for every state and ignores
/// deletions. Useful where the validity result is irrelevant to the test.
#[derive(Debug, Clone, Copy)]
pub struct FixedSolutionValidity(pub bool);

impl SolutionValidityTracker for FixedSolutionValidity {
    fn is_solution_valid(&self, _state_name: &str) -> bool {
        self.0
    }

    fn delete_solution_validity(&self, _state_name: &str) {}
}
