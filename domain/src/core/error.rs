//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// These represent contract violations by the caller (editing a record in
/// the wrong state, naming a setting that does not exist). Expected runtime
/// failures such as a dropped connection live in the application layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Cannot {operation} '{name}' while it is {state}")]
    InvalidTransition {
        name: String,
        state: &'static str,
        operation: &'static str,
    },

    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    #[error("Setting '{name}' is {actual}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl DomainError {
    /// Check if this error was caused by an out-of-order edit operation
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, DomainError::InvalidTransition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_display() {
        let error = DomainError::InvalidTransition {
            name: "MaxUploadFileSize".to_string(),
            state: "clean",
            operation: "revert",
        };
        assert_eq!(
            error.to_string(),
            "Cannot revert 'MaxUploadFileSize' while it is clean"
        );
        assert!(error.is_invalid_transition());
    }

    #[test]
    fn test_unknown_setting_is_not_transition() {
        assert!(!DomainError::UnknownSetting("Foo".into()).is_invalid_transition());
    }
}
