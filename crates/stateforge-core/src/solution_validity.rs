//! Solution validity abstraction.

/// Per-state cache of whether the worked solution of a state still satisfies
/// the answer rules of its interaction.
///
/// The editor only queries entries and deletes them. Keeping the cache up to
/// date is the implementor's concern.
pub trait SolutionValidityTracker: Send + Sync {
    /// Returns whether the solution stored for `state_name` is valid.
    fn is_solution_valid(&self, state_name: &str) -> bool;

    /// Forgets the validity entry for `state_name`.
    fn delete_solution_validity(&self, state_name: &str);
}
