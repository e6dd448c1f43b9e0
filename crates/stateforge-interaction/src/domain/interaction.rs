//! The interaction configuration attached to a state.

use serde::{Deserialize, Serialize};

use super::answer_choices::{AnswerChoice, derive_answer_choices};
use super::content::{AnswerGroup, CustomizationArgs, Hint, Outcome, Solution};

/// Configuration of the widget attached to a state.
///
/// A plain value: cloning produces a fully independent copy, which is how
/// the state editor hands configurations out to callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Widget type tag, e.g. `MultipleChoiceInput`.
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    answer_groups: Vec<AnswerGroup>,
    #[serde(default)]
    default_outcome: Option<Outcome>,
    #[serde(default)]
    customization_args: CustomizationArgs,
    #[serde(default)]
    solution: Option<Solution>,
    #[serde(default)]
    hints: Vec<Hint>,
}

impl InteractionConfig {
    /// Creates an empty configuration for the given widget type.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Returns the widget type tag.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the answer groups in evaluation order.
    #[must_use]
    pub fn answer_groups(&self) -> &[AnswerGroup] {
        &self.answer_groups
    }

    /// Returns the outcome taken when no answer group matches.
    #[must_use]
    pub fn default_outcome(&self) -> Option<&Outcome> {
        self.default_outcome.as_ref()
    }

    /// Returns the widget customization parameters.
    #[must_use]
    pub fn customization_args(&self) -> &CustomizationArgs {
        &self.customization_args
    }

    /// Returns the worked solution, if one is configured.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Returns the hints in display order.
    #[must_use]
    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn set_answer_groups(&mut self, answer_groups: Vec<AnswerGroup>) {
        self.answer_groups = answer_groups;
    }

    pub fn set_default_outcome(&mut self, default_outcome: Option<Outcome>) {
        self.default_outcome = default_outcome;
    }

    pub fn set_customization_args(&mut self, customization_args: CustomizationArgs) {
        self.customization_args = customization_args;
    }

    pub fn set_solution(&mut self, solution: Option<Solution>) {
        self.solution = solution;
    }

    pub fn set_hints(&mut self, hints: Vec<Hint>) {
        self.hints = hints;
    }

    /// Derives the answer choices for this widget from its own type tag and
    /// customization args.
    #[must_use]
    pub fn answer_choices(&self) -> Option<Vec<AnswerChoice>> {
        derive_answer_choices(self.id(), &self.customization_args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answer_choices::{AnswerChoiceValue, MULTIPLE_CHOICE_INPUT};
    use crate::domain::content::{CustomizationArg, SubtitledHtml};
    use serde_json::json;

    #[test]
    fn test_new_sets_only_the_widget_type() {
        let config = InteractionConfig::new("TextInput");

        assert_eq!(config.id(), Some("TextInput"));
        assert!(config.answer_groups().is_empty());
        assert!(config.default_outcome().is_none());
        assert!(config.customization_args().is_empty());
        assert!(config.solution().is_none());
        assert!(config.hints().is_empty());
    }

    #[test]
    fn test_setters_replace_each_field() {
        // Arrange
        let mut config = InteractionConfig::default();
        let outcome = Outcome::new("End", SubtitledHtml::new("default_outcome", "<p>Bye</p>"));
        let hint = Hint {
            hint_content: SubtitledHtml::new("hint_1", "<p>Think</p>"),
        };

        // Act
        config.set_id(Some("NumericInput".to_owned()));
        config.set_default_outcome(Some(outcome.clone()));
        config.set_hints(vec![hint.clone()]);

        // Assert
        assert_eq!(config.id(), Some("NumericInput"));
        assert_eq!(config.default_outcome(), Some(&outcome));
        assert_eq!(config.hints(), &[hint]);
    }

    #[test]
    fn test_answer_choices_use_own_type_and_args() {
        // Arrange
        let mut config = InteractionConfig::new(MULTIPLE_CHOICE_INPUT);
        let mut args = CustomizationArgs::new();
        args.insert(
            "choices".to_owned(),
            CustomizationArg::new(json!(["Red", "Blue"])),
        );
        config.set_customization_args(args);

        // Act
        let choices = config.answer_choices().unwrap();

        // Assert
        assert_eq!(choices.len(), 2);
        assert_eq!(choices[1].value, AnswerChoiceValue::Index(1));
        assert_eq!(choices[1].label, "Blue");
    }

    #[test]
    fn test_clone_is_independent_of_original() {
        // Arrange
        let original = InteractionConfig::new("TextInput");

        // Act
        let mut copy = original.clone();
        copy.set_id(Some("NumericInput".to_owned()));

        // Assert
        assert_eq!(original.id(), Some("TextInput"));
        assert_ne!(original, copy);
    }

    #[test]
    fn test_deserializes_from_partial_json() {
        let config: InteractionConfig = serde_json::from_value(json!({
            "id": "ItemSelectionInput",
            "customization_args": { "choices": { "value": ["X"] } }
        }))
        .unwrap();

        assert_eq!(config.id(), Some("ItemSelectionInput"));
        assert_eq!(config.answer_choices().map(|c| c.len()), Some(1));
    }
}
