//! Stateforge — interaction configuration.
//!
//! Holds the widget configuration attached to a state (type tag, answer
//! groups, default outcome, customization args, solution, hints) and derives
//! the selectable answer choices of choice-based widgets.

pub mod domain;
