//! The state editor session.

use std::fmt;
use std::sync::Arc;

use stateforge_core::error::EditorError;
use stateforge_core::solution_validity::SolutionValidityTracker;
use stateforge_interaction::domain::answer_choices::AnswerChoice;
use stateforge_interaction::domain::content::{
    AnswerGroup, CustomizationArgs, Hint, Outcome, Solution,
};
use stateforge_interaction::domain::interaction::InteractionConfig;
use tracing::{debug, error, warn};

use super::misconception::Misconception;

/// Editing context for a single state of a content graph.
///
/// One session exists per open editing context. It is reset when the context
/// closes or switches to another content item. Reads of the interaction and
/// the misconceptions hand out owned copies; the session stays the only
/// owner of its data.
pub struct StateEditorSession {
    active_state_name: Option<String>,
    state_names: Vec<String>,
    in_question_mode: Option<bool>,
    correctness_feedback_enabled: Option<bool>,
    solicit_answer_details: Option<bool>,
    exploration_whitelisted: bool,
    interaction: Option<InteractionConfig>,
    misconceptions: Vec<Misconception>,
    solution_validity: Arc<dyn SolutionValidityTracker>,
}

impl fmt::Debug for StateEditorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateEditorSession")
            .field("active_state_name", &self.active_state_name)
            .field("state_names", &self.state_names)
            .field("in_question_mode", &self.in_question_mode)
            .field("correctness_feedback_enabled", &self.correctness_feedback_enabled)
            .field("solicit_answer_details", &self.solicit_answer_details)
            .field("exploration_whitelisted", &self.exploration_whitelisted)
            .field("interaction", &self.interaction)
            .field("misconceptions", &self.misconceptions)
            .finish_non_exhaustive()
    }
}

impl StateEditorSession {
    /// Opens a session with every field unset.
    #[must_use]
    pub fn new(solution_validity: Arc<dyn SolutionValidityTracker>) -> Self {
        Self {
            active_state_name: None,
            state_names: Vec::new(),
            in_question_mode: None,
            correctness_feedback_enabled: None,
            solicit_answer_details: None,
            exploration_whitelisted: false,
            interaction: None,
            misconceptions: Vec::new(),
            solution_validity,
        }
    }

    /// Clears every field. The solution validity tracker is kept.
    pub fn reset(&mut self) {
        debug!(active_state_name = ?self.active_state_name, "resetting state editor session");
        *self = Self::new(Arc::clone(&self.solution_validity));
    }

    /// Returns the name of the state under edit, if one has been selected.
    #[must_use]
    pub fn active_state_name(&self) -> Option<&str> {
        self.active_state_name.as_deref()
    }

    /// Selects the state under edit.
    ///
    /// A missing or empty name is logged and ignored; the previous selection
    /// is kept.
    pub fn set_active_state_name(&mut self, name: Option<&str>) {
        match name {
            Some(name) if !name.is_empty() => {
                debug!(state_name = name, "active state changed");
                self.active_state_name = Some(name.to_owned());
            }
            _ => {
                error!(state_name = ?name, "invalid active state name");
            }
        }
    }

    /// Returns the names of every state in the graph.
    #[must_use]
    pub fn state_names(&self) -> &[String] {
        &self.state_names
    }

    /// Stores the names of every state in the graph. Callers guarantee the
    /// names are unique.
    pub fn set_state_names(&mut self, state_names: Vec<String>) {
        self.state_names = state_names;
    }

    #[must_use]
    pub fn in_question_mode(&self) -> Option<bool> {
        self.in_question_mode
    }

    pub fn set_in_question_mode(&mut self, in_question_mode: bool) {
        self.in_question_mode = Some(in_question_mode);
    }

    #[must_use]
    pub fn correctness_feedback_enabled(&self) -> Option<bool> {
        self.correctness_feedback_enabled
    }

    pub fn set_correctness_feedback_enabled(&mut self, enabled: bool) {
        self.correctness_feedback_enabled = Some(enabled);
    }

    #[must_use]
    pub fn solicit_answer_details(&self) -> Option<bool> {
        self.solicit_answer_details
    }

    pub fn set_solicit_answer_details(&mut self, solicit: bool) {
        self.solicit_answer_details = Some(solicit);
    }

    /// Returns whether the exploration is whitelisted. Consumed by
    /// authorization checks outside the editor.
    #[must_use]
    pub fn is_exploration_whitelisted(&self) -> bool {
        self.exploration_whitelisted
    }

    pub fn update_exploration_whitelisted_status(&mut self, whitelisted: bool) {
        self.exploration_whitelisted = whitelisted;
    }

    /// Returns a copy of the misconceptions of the skills linked to the
    /// content item.
    #[must_use]
    pub fn misconceptions(&self) -> Vec<Misconception> {
        self.misconceptions.clone()
    }

    pub fn set_misconceptions(&mut self, misconceptions: Vec<Misconception>) {
        self.misconceptions = misconceptions;
    }

    /// Returns a copy of the current interaction configuration.
    #[must_use]
    pub fn interaction(&self) -> Option<InteractionConfig> {
        self.interaction.clone()
    }

    /// Replaces the interaction configuration. `None` clears it.
    pub fn set_interaction(&mut self, interaction: Option<InteractionConfig>) {
        debug!(
            interaction_id = interaction.as_ref().and_then(InteractionConfig::id),
            "interaction replaced"
        );
        self.interaction = interaction;
    }

    fn interaction_mut(&mut self, field: &'static str) -> Result<&mut InteractionConfig, EditorError> {
        self.interaction
            .as_mut()
            .ok_or(EditorError::NullConfiguration { field })
    }

    /// Sets the widget type of the current interaction.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::NullConfiguration` if no interaction is set.
    pub fn set_interaction_id(&mut self, id: Option<String>) -> Result<(), EditorError> {
        self.interaction_mut("id")?.set_id(id);
        Ok(())
    }

    /// Sets the answer groups of the current interaction.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::NullConfiguration` if no interaction is set.
    pub fn set_interaction_answer_groups(
        &mut self,
        answer_groups: Vec<AnswerGroup>,
    ) -> Result<(), EditorError> {
        self.interaction_mut("answer groups")?
            .set_answer_groups(answer_groups);
        Ok(())
    }

    /// Sets the default outcome of the current interaction.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::NullConfiguration` if no interaction is set.
    pub fn set_interaction_default_outcome(
        &mut self,
        default_outcome: Option<Outcome>,
    ) -> Result<(), EditorError> {
        self.interaction_mut("default outcome")?
            .set_default_outcome(default_outcome);
        Ok(())
    }

    /// Sets the customization args of the current interaction.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::NullConfiguration` if no interaction is set.
    pub fn set_interaction_customization_args(
        &mut self,
        customization_args: CustomizationArgs,
    ) -> Result<(), EditorError> {
        self.interaction_mut("customization args")?
            .set_customization_args(customization_args);
        Ok(())
    }

    /// Sets the worked solution of the current interaction.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::NullConfiguration` if no interaction is set.
    pub fn set_interaction_solution(
        &mut self,
        solution: Option<Solution>,
    ) -> Result<(), EditorError> {
        self.interaction_mut("solution")?.set_solution(solution);
        Ok(())
    }

    /// Sets the hints of the current interaction.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::NullConfiguration` if no interaction is set.
    pub fn set_interaction_hints(&mut self, hints: Vec<Hint>) -> Result<(), EditorError> {
        self.interaction_mut("hints")?.set_hints(hints);
        Ok(())
    }

    /// Derives the answer choices of the current interaction. `None` if no
    /// interaction is set or the widget has no choice list.
    #[must_use]
    pub fn answer_choices(&self) -> Option<Vec<AnswerChoice>> {
        self.interaction
            .as_ref()
            .and_then(InteractionConfig::answer_choices)
    }

    /// Asks the tracker whether the solution of the active state is valid.
    ///
    /// Returns `false` without consulting the tracker while no state is
    /// selected.
    #[must_use]
    pub fn is_current_solution_valid(&self) -> bool {
        match self.active_state_name.as_deref() {
            Some(state_name) => self.solution_validity.is_solution_valid(state_name),
            None => {
                warn!("solution validity queried before a state was selected");
                false
            }
        }
    }

    /// Drops the tracker entry of the active state. Does nothing while no
    /// state is selected.
    pub fn delete_current_solution_validity(&self) {
        if let Some(state_name) = self.active_state_name.as_deref() {
            self.solution_validity.delete_solution_validity(state_name);
        }
    }
}
