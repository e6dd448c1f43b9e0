//! Domain types for interaction configuration.

pub mod answer_choices;
pub mod content;
pub mod interaction;
