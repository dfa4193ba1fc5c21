//! Error types for pagekit-core reads.
//!
//! Every failure of the pagination path is fatal to the call: callers never
//! receive a partially built page. Non-fatal conditions (unknown sort column,
//! empty result) are handled in place and only logged.

use thiserror::Error;

/// Error returned by filtering and pagination operations
#[derive(Error, Debug)]
pub enum PageError {
    /// Entity name is not in the registry
    #[error("unsupported entity '{name}'")]
    UnsupportedEntity { name: String },

    /// A filter value could not be coerced to its column type
    #[error("invalid value '{value}' for filter '{field}': expected {expected}")]
    InvalidFilterValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// `page` or `pageSize` below 1 (or beyond the supported range)
    #[error("invalid pagination parameter '{field}': {value} (must be between 1 and {max})")]
    InvalidPaginationParameter {
        field: &'static str,
        value: i64,
        max: u32,
    },

    /// Reserved request parameter that is not an integer
    #[error("invalid value '{value}' for '{field}': expected an integer")]
    MalformedParameter { field: &'static str, value: String },

    /// Sort direction other than `asc` / `desc`
    #[error("invalid sort order '{value}': expected 'asc' or 'desc'")]
    InvalidSortOrder { value: String },

    /// Storage engine failure, passed through untouched
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result alias for pagination operations
pub type Result<T> = std::result::Result<T, PageError>;

impl PageError {
    pub fn unsupported_entity(name: impl Into<String>) -> Self {
        Self::UnsupportedEntity { name: name.into() }
    }

    pub fn invalid_filter(
        field: &'static str,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidFilterValue {
            field,
            value: value.into(),
            expected,
        }
    }

    pub fn invalid_pagination(field: &'static str, value: i64) -> Self {
        Self::InvalidPaginationParameter {
            field,
            value,
            max: u32::MAX,
        }
    }

    /// True for errors caused by caller input rather than the database.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Database(_))
    }
}
