//! Editor error types.

use thiserror::Error;

/// Top-level editor error type.
///
/// Only caller-contract violations surface here. Rejected identities are
/// absorbed by the session and unrecognised widget types are not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// An interaction sub-field was mutated while no interaction is set.
    #[error("null configuration: cannot set interaction {field} before an interaction is set")]
    NullConfiguration {
        /// The interaction field the caller tried to write.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_configuration_message_names_the_field() {
        let err = EditorError::NullConfiguration { field: "hints" };

        assert_eq!(
            err.to_string(),
            "null configuration: cannot set interaction hints before an interaction is set"
        );
    }
}
