//! Misconception records supplied by the skills service.

use serde::{Deserialize, Serialize};

/// A common learner error attached to a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misconception {
    /// Identifier, unique within the owning skill.
    pub id: i64,
    /// Short name shown to authors.
    pub name: String,
    /// Author notes.
    #[serde(default)]
    pub notes: String,
    /// Feedback shown to a learner who exhibits the misconception.
    #[serde(default)]
    pub feedback: String,
    /// Whether every question on the skill must address it.
    #[serde(default = "default_must_be_addressed")]
    pub must_be_addressed: bool,
}

fn default_must_be_addressed() -> bool {
    true
}
