//! Read-side views over the state editor session.

pub mod query_handlers;
