//! Shared test doubles and fixtures for the Stateforge state editor.

mod fixtures;
mod solution_validity;

pub use fixtures::{
    image_click_interaction, item_selection_interaction, multiple_choice_interaction,
    sample_answer_group, sample_hint, sample_outcome, sample_solution,
};
pub use solution_validity::{FixedSolutionValidity, RecordingSolutionValidity};
