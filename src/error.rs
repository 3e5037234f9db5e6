//! Error types.
//!
//! Mutations never fail (they report [`MutationOutcome`](crate::session::MutationOutcome)
//! instead). Errors only arise when a session is opened from invalid input,
//! when configuration cannot be decoded, or when textual slot data cannot be
//! parsed.

use thiserror::Error;

use crate::validation::ValidationError;

/// Error returned when opening a session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Slot catalog or initial pool failed validation.
    #[error("invalid session input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Configuration or request payload could not be decoded.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl SessionError {
    /// Validation problems, if this is an input error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            SessionError::InvalidInput(errors) => errors,
            SessionError::Config(_) => &[],
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    match errors {
        [] => "no details".to_string(),
        [only] => only.message.clone(),
        [first, rest @ ..] => format!("{} (and {} more)", first.message, rest.len()),
    }
}

/// Error parsing weekday or time text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unrecognized day name.
    #[error("unknown weekday: '{0}'")]
    InvalidWeekday(String),

    /// Not a valid `HH:MM` time of day.
    #[error("invalid time of day: '{0}'")]
    InvalidTime(String),

    /// Not a valid `HH:MM-HH:MM` range, or start is not before end.
    #[error("invalid time range: '{0}'")]
    InvalidTimeRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_input_message() {
        let err = SessionError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::DuplicateSlotId, "Duplicate slot ID: S1"),
            ValidationError::new(ValidationErrorKind::InvalidCapacity, "Slot 'S2' has zero capacity"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid session input: Duplicate slot ID: S1 (and 1 more)"
        );
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_config_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: SessionError = json_err.into();
        assert!(err.to_string().starts_with("configuration error"));
        assert!(err.validation_errors().is_empty());
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::InvalidWeekday("Funday".into());
        assert_eq!(err.to_string(), "unknown weekday: 'Funday'");
    }
}
