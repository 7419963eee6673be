//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_names_field_and_bounds() {
        let err = ValidationError::out_of_range("cycle", 2, 9998, 10000);
        assert_eq!(
            err.to_string(),
            "Field 'cycle' must be between 2 and 9998, got 10000"
        );
    }

    #[test]
    fn invalid_format_includes_reason() {
        let err = ValidationError::invalid_format("cycle", "2015 is not an even year");
        assert_eq!(
            err.to_string(),
            "Field 'cycle' has invalid format: 2015 is not an even year"
        );
    }
}
