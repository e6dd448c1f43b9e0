//! Content records carried by an interaction configuration.
//!
//! These are plain values. The editor stores and copies them but never
//! evaluates them; rule matching belongs to the answer-validation service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single customization parameter, stored as `{ "value": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationArg {
    /// The parameter value, already validated against the widget schema.
    pub value: Value,
}

impl CustomizationArg {
    /// Wraps a raw JSON value.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

/// Widget customization parameters keyed by parameter name.
pub type CustomizationArgs = BTreeMap<String, CustomizationArg>;

/// Translatable rich text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitledHtml {
    /// Identifier used to attach translations and voiceovers.
    pub content_id: String,
    /// The HTML body.
    pub html: String,
}

impl SubtitledHtml {
    /// Creates rich text with the given content id and body.
    #[must_use]
    pub fn new(content_id: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
            html: html.into(),
        }
    }
}

/// Where the learner goes, and what they are told, after an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Name of the destination state.
    pub dest: String,
    /// Feedback shown to the learner.
    pub feedback: SubtitledHtml,
    /// Whether this outcome marks the answer as correct.
    #[serde(default)]
    pub labelled_as_correct: bool,
    /// Parameter changes applied when the outcome is taken.
    #[serde(default)]
    pub param_changes: Vec<Value>,
    /// Exploration the learner is sent to for a refresher.
    #[serde(default)]
    pub refresher_exploration_id: Option<String>,
    /// Skill the learner is missing, if the outcome signals one.
    #[serde(default)]
    pub missing_prerequisite_skill_id: Option<String>,
}

impl Outcome {
    /// Creates an outcome leading to `dest` with the given feedback.
    #[must_use]
    pub fn new(dest: impl Into<String>, feedback: SubtitledHtml) -> Self {
        Self {
            dest: dest.into(),
            feedback,
            labelled_as_correct: false,
            param_changes: Vec::new(),
            refresher_exploration_id: None,
            missing_prerequisite_skill_id: None,
        }
    }
}

/// A single answer-matching rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// The rule type, e.g. `Equals` or `Contains`.
    pub rule_type: String,
    /// Rule inputs keyed by input name.
    #[serde(default)]
    pub inputs: BTreeMap<String, Value>,
}

/// A set of rules and the outcome taken when any of them matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerGroup {
    /// Rules evaluated against the submitted answer.
    pub rules: Vec<Rule>,
    /// Outcome taken when a rule matches.
    pub outcome: Outcome,
    /// Answers classified into this group by authors.
    #[serde(default)]
    pub training_data: Vec<Value>,
    /// Misconception this group addresses, as `<skill_id>-<misconception_id>`.
    #[serde(default)]
    pub tagged_skill_misconception_id: Option<String>,
}

/// A hint shown to a learner who is stuck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    /// The hint body.
    pub hint_content: SubtitledHtml,
}

/// A worked solution for the state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Whether the correct answer is the only acceptable one.
    pub answer_is_exclusive: bool,
    /// The answer, in the widget's own answer format.
    pub correct_answer: Value,
    /// Explanation shown alongside the answer.
    pub explanation: SubtitledHtml,
}
