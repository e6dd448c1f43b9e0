//! Answer-choice derivation for choice-based widgets.
//!
//! Widgets that reference choices by position produce index-valued choices.
//! Widgets that move choice content around (selection and sorting) produce
//! text-valued choices. Rule inputs authored against either kind depend on
//! that difference, so the two must not be unified.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::content::CustomizationArgs;

/// Widget type tag of the multiple-choice widget.
pub const MULTIPLE_CHOICE_INPUT: &str = "MultipleChoiceInput";
/// Widget type tag of the image-with-clickable-regions widget.
pub const IMAGE_CLICK_INPUT: &str = "ImageClickInput";
/// Widget type tag of the multi-select widget.
pub const ITEM_SELECTION_INPUT: &str = "ItemSelectionInput";
/// Widget type tag of the drag-and-drop ordering widget.
pub const DRAG_AND_DROP_SORT_INPUT: &str = "DragAndDropSortInput";

/// Customization parameter holding the ordered choice texts.
const CHOICES_ARG: &str = "choices";
/// Customization parameter holding the image and its labeled regions.
const IMAGE_AND_REGIONS_ARG: &str = "imageAndRegions";

/// How a widget exposes its selectable answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerChoiceCategory {
    /// Ordered single-valued choices referenced by position.
    ChoiceList,
    /// Labeled regions of an image, referenced by label.
    RegionLabels,
    /// Choices referenced by their text, since the widget reorders content.
    SetOfChoices,
}

impl AnswerChoiceCategory {
    /// Resolves a widget type tag. Returns `None` for widgets without a
    /// fixed choice list.
    #[must_use]
    pub fn from_widget_type(widget_type: &str) -> Option<Self> {
        match widget_type {
            MULTIPLE_CHOICE_INPUT => Some(Self::ChoiceList),
            IMAGE_CLICK_INPUT => Some(Self::RegionLabels),
            ITEM_SELECTION_INPUT | DRAG_AND_DROP_SORT_INPUT => Some(Self::SetOfChoices),
            _ => None,
        }
    }
}

/// The value a rule refers to when it names an answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerChoiceValue {
    /// Zero-based position in the choice list.
    Index(usize),
    /// Literal choice text or region label.
    Text(String),
}

/// A selectable answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerChoice {
    /// The value rules match against.
    #[serde(rename = "val")]
    pub value: AnswerChoiceValue,
    /// The text shown to the author.
    pub label: String,
}

/// Derives the ordered answer choices for a widget.
///
/// Returns `None` when `widget_type` is absent or empty, when the widget has
/// no fixed choice list, or when its customization args do not have the
/// expected shape.
#[must_use]
pub fn derive_answer_choices(
    widget_type: Option<&str>,
    customization_args: &CustomizationArgs,
) -> Option<Vec<AnswerChoice>> {
    let widget_type = widget_type.filter(|tag| !tag.is_empty())?;
    let category = AnswerChoiceCategory::from_widget_type(widget_type)?;

    let choices: Option<Vec<AnswerChoice>> = match category {
        AnswerChoiceCategory::ChoiceList => choice_texts(customization_args).map(|texts| {
            texts
                .into_iter()
                .enumerate()
                .map(|(index, text)| AnswerChoice {
                    value: AnswerChoiceValue::Index(index),
                    label: text,
                })
                .collect()
        }),
        AnswerChoiceCategory::RegionLabels => {
            region_labels(customization_args).map(text_valued_choices)
        }
        AnswerChoiceCategory::SetOfChoices => {
            choice_texts(customization_args).map(text_valued_choices)
        }
    };

    if choices.is_none() {
        warn!(
            widget_type,
            ?category,
            "customization args do not match the widget's choice schema"
        );
    }
    choices
}

fn text_valued_choices(texts: Vec<String>) -> Vec<AnswerChoice> {
    texts
        .into_iter()
        .map(|text| AnswerChoice {
            value: AnswerChoiceValue::Text(text.clone()),
            label: text,
        })
        .collect()
}

fn choice_texts(customization_args: &CustomizationArgs) -> Option<Vec<String>> {
    let choices = customization_args.get(CHOICES_ARG)?.value.as_array()?;
    choices.iter().map(string_value).collect()
}

fn region_labels(customization_args: &CustomizationArgs) -> Option<Vec<String>> {
    let regions = customization_args
        .get(IMAGE_AND_REGIONS_ARG)?
        .value
        .get("labeledRegions")?
        .as_array()?;
    regions
        .iter()
        .map(|region| region.get("label").and_then(string_value))
        .collect()
}

fn string_value(value: &Value) -> Option<String> {
    value.as_str().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(json: Value) -> CustomizationArgs {
        serde_json::from_value(json).unwrap()
    }

    fn text_choice(text: &str) -> AnswerChoice {
        AnswerChoice {
            value: AnswerChoiceValue::Text(text.to_owned()),
            label: text.to_owned(),
        }
    }

    #[test]
    fn test_multiple_choice_produces_index_valued_choices_in_order() {
        // Arrange
        let customization_args = args(json!({ "choices": { "value": ["A", "B", "C"] } }));

        // Act
        let choices = derive_answer_choices(Some(MULTIPLE_CHOICE_INPUT), &customization_args);

        // Assert
        let expected: Vec<AnswerChoice> = ["A", "B", "C"]
            .iter()
            .enumerate()
            .map(|(index, label)| AnswerChoice {
                value: AnswerChoiceValue::Index(index),
                label: (*label).to_owned(),
            })
            .collect();
        assert_eq!(choices, Some(expected));
    }

    #[test]
    fn test_multiple_choice_gives_duplicate_labels_distinct_indices() {
        // Arrange
        let customization_args = args(json!({ "choices": { "value": ["Same", "Same"] } }));

        // Act
        let choices =
            derive_answer_choices(Some(MULTIPLE_CHOICE_INPUT), &customization_args).unwrap();

        // Assert
        assert_eq!(choices[0].value, AnswerChoiceValue::Index(0));
        assert_eq!(choices[1].value, AnswerChoiceValue::Index(1));
        assert_eq!(choices[0].label, choices[1].label);
    }

    #[test]
    fn test_item_selection_produces_text_valued_choices() {
        // Arrange
        let customization_args = args(json!({ "choices": { "value": ["X", "Y"] } }));

        // Act
        let choices = derive_answer_choices(Some(ITEM_SELECTION_INPUT), &customization_args);

        // Assert
        assert_eq!(choices, Some(vec![text_choice("X"), text_choice("Y")]));
    }

    #[test]
    fn test_drag_and_drop_sort_produces_text_valued_choices() {
        // Arrange
        let customization_args = args(json!({ "choices": { "value": ["first", "second"] } }));

        // Act
        let choices = derive_answer_choices(Some(DRAG_AND_DROP_SORT_INPUT), &customization_args);

        // Assert
        assert_eq!(
            choices,
            Some(vec![text_choice("first"), text_choice("second")])
        );
    }

    #[test]
    fn test_image_click_produces_region_labels_without_deduplication() {
        // Arrange
        let customization_args = args(json!({
            "imageAndRegions": {
                "value": {
                    "imagePath": "map.png",
                    "labeledRegions": [
                        { "label": "r1", "region": { "regionType": "Rectangle" } },
                        { "label": "r2" },
                        { "label": "r1" }
                    ]
                }
            }
        }));

        // Act
        let choices = derive_answer_choices(Some(IMAGE_CLICK_INPUT), &customization_args);

        // Assert
        assert_eq!(
            choices,
            Some(vec![text_choice("r1"), text_choice("r2"), text_choice("r1")])
        );
    }

    #[test]
    fn test_unrecognised_or_absent_widget_type_is_not_applicable() {
        let customization_args = args(json!({ "choices": { "value": ["A"] } }));

        assert_eq!(derive_answer_choices(Some("TextInput"), &customization_args), None);
        assert_eq!(derive_answer_choices(None, &customization_args), None);
        assert_eq!(derive_answer_choices(Some(""), &customization_args), None);
    }

    #[test]
    fn test_malformed_customization_args_are_not_applicable() {
        // Arrange
        let missing = CustomizationArgs::new();
        let not_strings = args(json!({ "choices": { "value": [1, 2] } }));
        let region_without_label = args(json!({
            "imageAndRegions": { "value": { "labeledRegions": [{ "region": {} }] } }
        }));

        // Act / Assert
        assert_eq!(derive_answer_choices(Some(MULTIPLE_CHOICE_INPUT), &missing), None);
        assert_eq!(derive_answer_choices(Some(ITEM_SELECTION_INPUT), &not_strings), None);
        assert_eq!(
            derive_answer_choices(Some(IMAGE_CLICK_INPUT), &region_without_label),
            None
        );
    }

    #[test]
    fn test_empty_choice_list_yields_empty_choices() {
        let customization_args = args(json!({ "choices": { "value": [] } }));

        assert_eq!(
            derive_answer_choices(Some(MULTIPLE_CHOICE_INPUT), &customization_args),
            Some(Vec::new())
        );
    }

    #[test]
    fn test_answer_choice_serializes_value_as_val() {
        // Arrange
        let index_choice = AnswerChoice {
            value: AnswerChoiceValue::Index(2),
            label: "C".to_owned(),
        };

        // Act
        let index_json = serde_json::to_value(&index_choice).unwrap();
        let text_json = serde_json::to_value(text_choice("X")).unwrap();

        // Assert
        assert_eq!(index_json, json!({ "val": 2, "label": "C" }));
        assert_eq!(text_json, json!({ "val": "X", "label": "X" }));
    }

    #[test]
    fn test_category_resolution_covers_every_choice_widget() {
        assert_eq!(
            AnswerChoiceCategory::from_widget_type(MULTIPLE_CHOICE_INPUT),
            Some(AnswerChoiceCategory::ChoiceList)
        );
        assert_eq!(
            AnswerChoiceCategory::from_widget_type(IMAGE_CLICK_INPUT),
            Some(AnswerChoiceCategory::RegionLabels)
        );
        assert_eq!(
            AnswerChoiceCategory::from_widget_type(ITEM_SELECTION_INPUT),
            Some(AnswerChoiceCategory::SetOfChoices)
        );
        assert_eq!(
            AnswerChoiceCategory::from_widget_type(DRAG_AND_DROP_SORT_INPUT),
            Some(AnswerChoiceCategory::SetOfChoices)
        );
        assert_eq!(AnswerChoiceCategory::from_widget_type("NumericInput"), None);
    }
}
