//! Error types for hottakes.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for hottakes operations.
#[derive(Error, Debug)]
pub enum HotTakeError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// The dataset could not be read, parsed, or had an entry of the wrong shape.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// The configuration file could not be read, parsed, or validated.
    #[error("Config error: {0}")]
    Config(String),

    /// The `takes` category is empty, so there is no template to pick.
    #[error("no takes available in dataset")]
    NoTakes,

    /// A bracket group produced an empty candidate pool.
    #[error("no valid placeholder in '{expression}' (template: \"{template}\")")]
    UnresolvedPlaceholder {
        /// The full bracket expression, braces included.
        expression: String,
        /// The text of the template the expression came from.
        template: String,
    },
}

impl HotTakeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            HotTakeError::UserError(_) | HotTakeError::Config(_) => exit_codes::USER_ERROR,
            HotTakeError::Dataset(_) | HotTakeError::NoTakes => exit_codes::DATASET_FAILURE,
            HotTakeError::UnresolvedPlaceholder { .. } => exit_codes::RESOLUTION_FAILURE,
        }
    }
}

/// Result type alias for hottakes operations.
pub type Result<T> = std::result::Result<T, HotTakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = HotTakeError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(err.to_string(), "bad argument");
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = HotTakeError::Config("bad count".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn dataset_errors_have_correct_exit_code() {
        let err = HotTakeError::Dataset("missing field `tlds`".to_string());
        assert_eq!(err.exit_code(), exit_codes::DATASET_FAILURE);
        assert_eq!(HotTakeError::NoTakes.exit_code(), exit_codes::DATASET_FAILURE);
    }

    #[test]
    fn resolution_error_has_correct_exit_code() {
        let err = HotTakeError::UnresolvedPlaceholder {
            expression: "{nope}".to_string(),
            template: "{nope} is overrated".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::RESOLUTION_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = HotTakeError::UnresolvedPlaceholder {
            expression: "{nope}".to_string(),
            template: "{nope} is overrated".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no valid placeholder in '{nope}' (template: \"{nope} is overrated\")"
        );

        let err = HotTakeError::Dataset("stub".to_string());
        assert_eq!(err.to_string(), "Dataset error: stub");
    }
}
