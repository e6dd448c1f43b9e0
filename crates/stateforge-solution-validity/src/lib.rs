//! In-memory solution validity cache.
//!
//! Tracks, per state, whether the worked solution still satisfies the
//! state's answer rules. The validator writes entries; the state editor
//! reads and deletes them through `SolutionValidityTracker`.

pub mod in_memory;
