//! Query handlers for the state editor.
//!
//! This module builds read-only view DTOs from a session.

use serde::Serialize;
use stateforge_interaction::domain::answer_choices::{AnswerChoice, derive_answer_choices};
use stateforge_interaction::domain::content::CustomizationArgs;

use crate::domain::session::StateEditorSession;

/// Read-only view of a state editor session.
#[derive(Debug, Serialize)]
pub struct StateEditorView {
    /// The state under edit.
    pub active_state_name: Option<String>,
    /// Every state name in the graph.
    pub state_names: Vec<String>,
    /// Whether the editor is editing a question rather than an exploration.
    pub in_question_mode: Option<bool>,
    /// Whether answers are marked correct or incorrect.
    pub correctness_feedback_enabled: Option<bool>,
    /// Whether learners are asked to explain their answers.
    pub solicit_answer_details: Option<bool>,
    /// Whether the exploration is whitelisted.
    pub exploration_whitelisted: bool,
    /// Widget type of the current interaction, if any.
    pub interaction_id: Option<String>,
    /// Number of misconceptions available for tagging.
    pub misconception_count: usize,
}

/// Returns a view of the session.
#[must_use]
pub fn get_state_editor_view(session: &StateEditorSession) -> StateEditorView {
    let interaction = session.interaction();
    StateEditorView {
        active_state_name: session.active_state_name().map(str::to_owned),
        state_names: session.state_names().to_vec(),
        in_question_mode: session.in_question_mode(),
        correctness_feedback_enabled: session.correctness_feedback_enabled(),
        solicit_answer_details: session.solicit_answer_details(),
        exploration_whitelisted: session.is_exploration_whitelisted(),
        interaction_id: interaction.and_then(|i| i.id().map(str::to_owned)),
        misconception_count: session.misconceptions().len(),
    }
}

/// Answer choices offered to a choice-rendering surface.
#[derive(Debug, Serialize)]
pub struct AnswerChoicesView {
    /// Widget type the choices were derived for.
    pub interaction_id: Option<String>,
    /// The choices, or `None` if the widget has no choice list.
    pub answer_choices: Option<Vec<AnswerChoice>>,
}

/// Returns the answer choices of the session's current interaction.
#[must_use]
pub fn get_current_answer_choices(session: &StateEditorSession) -> AnswerChoicesView {
    AnswerChoicesView {
        interaction_id: session
            .interaction()
            .and_then(|i| i.id().map(str::to_owned)),
        answer_choices: session.answer_choices(),
    }
}

/// Derives answer choices for an arbitrary widget, without a session.
#[must_use]
pub fn get_answer_choices(
    interaction_id: Option<String>,
    customization_args: &CustomizationArgs,
) -> AnswerChoicesView {
    let answer_choices = derive_answer_choices(interaction_id.as_deref(), customization_args);
    AnswerChoicesView {
        interaction_id,
        answer_choices,
    }
}
