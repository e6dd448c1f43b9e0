//! Domain types for the state editor.

pub mod misconception;
pub mod session;
