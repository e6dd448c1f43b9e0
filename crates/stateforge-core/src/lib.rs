//! Stateforge Core — shared editor abstractions.
//!
//! This crate defines the error taxonomy and collaborator traits that the
//! interaction and state-editor crates depend on. It contains no
//! infrastructure code.

pub mod error;
pub mod solution_validity;
