//! Stateforge — state editor session.
//!
//! Tracks the state currently under edit, the editor-mode flags, and the
//! interaction configuration of that state. Solution-validity queries are
//! delegated to an injected tracker.

pub mod application;
pub mod domain;
