//! Stateforge API — HTTP surface over a state editor session.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
