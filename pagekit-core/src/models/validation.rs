//! Validation error types

use std::fmt;

/// Validation error for write payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., email)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Number outside its allowed range
    OutOfRange { field: &'static str, min: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::OutOfRange { field, min } => write!(f, "{} must be at least {}", field, min),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim, require non-empty, enforce a character limit.
pub(crate) fn required_text(
    value: &str,
    field: &'static str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    optional_text(trimmed, field, max)
}

/// Enforce a character limit without requiring content.
pub(crate) fn optional_text(
    value: &str,
    field: &'static str,
    max: usize,
) -> Result<String, ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(value.to_owned())
}

pub(crate) fn non_negative(value: i32, field: &'static str) -> Result<i32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::OutOfRange { field, min: 0 });
    }
    Ok(value)
}
