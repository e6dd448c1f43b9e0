//! `SolutionValidityTracker` backed by a mutex-guarded map.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use stateforge_core::solution_validity::SolutionValidityTracker;
use tracing::debug;

/// Solution validities keyed by state name. States without an entry read as
/// not valid.
#[derive(Debug, Default)]
pub struct InMemorySolutionValidity {
    validities: Mutex<BTreeMap<String, bool>>,
}

impl InMemorySolutionValidity {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Every critical section leaves the map consistent; a poisoned lock is
    // recovered rather than propagated.
    fn entries(&self) -> MutexGuard<'_, BTreeMap<String, bool>> {
        self.validities
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces all entries, marking every listed state as valid.
    pub fn init(&self, state_names: &[String]) {
        let mut entries = self.entries();
        entries.clear();
        entries.extend(state_names.iter().map(|name| (name.clone(), true)));
        debug!(state_count = entries.len(), "initialised solution validities");
    }

    /// Records whether the solution of `state_name` is valid.
    pub fn update_validity(&self, state_name: &str, solution_is_valid: bool) {
        self.entries()
            .insert(state_name.to_owned(), solution_is_valid);
        debug!(state_name, solution_is_valid, "updated solution validity");
    }

    /// Moves the entry of a renamed state to its new name. Does nothing if
    /// the old name has no entry.
    pub fn on_rename_state(&self, new_state_name: &str, old_state_name: &str) {
        let mut entries = self.entries();
        if let Some(validity) = entries.remove(old_state_name) {
            entries.insert(new_state_name.to_owned(), validity);
        }
    }

    /// Returns a snapshot of every entry.
    #[must_use]
    pub fn all_validities(&self) -> BTreeMap<String, bool> {
        self.entries().clone()
    }
}

impl SolutionValidityTracker for InMemorySolutionValidity {
    fn is_solution_valid(&self, state_name: &str) -> bool {
        self.entries().get(state_name).copied().unwrap_or(false)
    }

    fn delete_solution_validity(&self, state_name: &str) {
        if self.entries().remove(state_name).is_some() {
            debug!(state_name, "deleted solution validity");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_owned()).collect()
    }

    #[test]
    fn test_init_marks_every_state_valid() {
        // Arrange
        let cache = InMemorySolutionValidity::new();

        // Act
        cache.init(&names(&["Intro", "End"]));

        // Assert
        assert!(cache.is_solution_valid("Intro"));
        assert!(cache.is_solution_valid("End"));
        assert_eq!(cache.all_validities().len(), 2);
    }

    #[test]
    fn test_init_discards_previous_entries() {
        let cache = InMemorySolutionValidity::new();
        cache.update_validity("Old", false);

        cache.init(&names(&["New"]));

        assert_eq!(
            cache.all_validities(),
            BTreeMap::from([("New".to_owned(), true)])
        );
    }

    #[test]
    fn test_unknown_state_is_not_valid() {
        let cache = InMemorySolutionValidity::new();

        assert!(!cache.is_solution_valid("Missing"));
    }

    #[test]
    fn test_update_validity_overwrites_entry() {
        // Arrange
        let cache = InMemorySolutionValidity::new();
        cache.init(&names(&["Intro"]));

        // Act
        cache.update_validity("Intro", false);

        // Assert
        assert!(!cache.is_solution_valid("Intro"));
    }

    #[test]
    fn test_on_rename_state_moves_entry() {
        // Arrange
        let cache = InMemorySolutionValidity::new();
        cache.update_validity("Intro", false);
        cache.update_validity("End", true);

        // Act
        cache.on_rename_state("Welcome", "Intro");

        // Assert
        let all = cache.all_validities();
        assert_eq!(all.get("Welcome"), Some(&false));
        assert_eq!(all.get("Intro"), None);
        assert_eq!(all.get("End"), Some(&true));
    }

    #[test]
    fn test_on_rename_unknown_state_is_a_no_op() {
        let cache = InMemorySolutionValidity::new();
        cache.update_validity("End", true);

        cache.on_rename_state("Welcome", "Missing");

        assert_eq!(cache.all_validities().len(), 1);
    }

    #[test]
    fn test_delete_solution_validity_removes_entry() {
        // Arrange
        let cache = InMemorySolutionValidity::new();
        cache.init(&names(&["Intro", "End"]));

        // Act
        cache.delete_solution_validity("Intro");

        // Assert
        assert!(!cache.is_solution_valid("Intro"));
        assert!(cache.is_solution_valid("End"));
        assert_eq!(cache.all_validities().len(), 1);
    }
}
