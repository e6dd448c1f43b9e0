//! Test fixtures — ready-made interaction content for tests.

use serde_json::json;
use stateforge_interaction::domain::answer_choices::{
    IMAGE_CLICK_INPUT, ITEM_SELECTION_INPUT, MULTIPLE_CHOICE_INPUT,
};
use stateforge_interaction::domain::content::{
    AnswerGroup, CustomizationArg, CustomizationArgs, Hint, Outcome, Rule, Solution,
    SubtitledHtml,
};
use stateforge_interaction::domain::interaction::InteractionConfig;

fn with_args(widget_type: &str, name: &str, value: serde_json::Value) -> InteractionConfig {
    let mut args = CustomizationArgs::new();
    args.insert(name.to_owned(), CustomizationArg::new(value));
    let mut config = InteractionConfig::new(widget_type);
    config.set_customization_args(args);
    config
}

/// A multiple-choice interaction with choices `A`, `B`, `C`.
#[must_use]
pub fn multiple_choice_interaction() -> InteractionConfig {
    with_args(MULTIPLE_CHOICE_INPUT, "choices", json!(["A", "B", "C"]))
}

/// An item-selection interaction with choices `X`, `Y`.
#[must_use]
pub fn item_selection_interaction() -> InteractionConfig {
    with_args(ITEM_SELECTION_INPUT, "choices", json!(["X", "Y"]))
}

/// An image-click interaction with regions `r1`, `r2`.
#[must_use]
pub fn image_click_interaction() -> InteractionConfig {
    with_args(
        IMAGE_CLICK_INPUT,
        "imageAndRegions",
        json!({
            "imagePath": "regions.png",
            "labeledRegions": [{ "label": "r1" }, { "label": "r2" }]
        }),
    )
}

/// An outcome leading to `dest` with placeholder feedback.
#[must_use]
pub fn sample_outcome(dest: &str) -> Outcome {
    Outcome::new(dest, SubtitledHtml::new("feedback_1", "<p>Try again</p>"))
}

/// An answer group with a single `Equals` rule on input `x`.
#[must_use]
pub fn sample_answer_group(dest: &str, x: serde_json::Value) -> AnswerGroup {
    AnswerGroup {
        rules: vec![Rule {
            rule_type: "Equals".to_owned(),
            inputs: [("x".to_owned(), x)].into_iter().collect(),
        }],
        outcome: sample_outcome(dest),
        training_data: Vec::new(),
        tagged_skill_misconception_id: None,
    }
}

/// A hint with the given body.
#[must_use]
pub fn sample_hint(html: &str) -> Hint {
    Hint {
        hint_content: SubtitledHtml::new("hint_1", html),
    }
}

/// An exclusive solution with the given correct answer.
#[must_use]
pub fn sample_solution(correct_answer: serde_json::Value) -> Solution {
    Solution {
        answer_is_exclusive: true,
        correct_answer,
        explanation: SubtitledHtml::new("solution", "<p>Because.</p>"),
    }
}
