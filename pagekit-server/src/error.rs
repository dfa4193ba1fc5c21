//! API error types with IntoResponse
//!
//! Errors are converted to JSON `{error, message}` bodies with a status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pagekit_core::db::DbError;
use pagekit_core::models::ValidationError;
use pagekit_core::PageError;
use serde_json::json;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Write payload failed validation (400)
    Validation(ValidationError),

    /// Listing parameters rejected by the engine (400)
    InvalidRequest(PageError),

    /// Query string could not be decoded (400)
    MalformedQuery { reason: String },

    /// Entity name not registered (404)
    UnsupportedEntity { name: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Unique constraint violated (409)
    Conflict { resource: &'static str, reason: String },

    /// Database error (500, logged)
    Database(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidRequest(_) | Self::MalformedQuery { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::UnsupportedEntity { .. } | Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::InvalidRequest(_) | Self::MalformedQuery { .. } => "invalid_request",
            Self::UnsupportedEntity { .. } => "unsupported_entity",
            Self::NotFound { .. } => "not_found",
            Self::Conflict { .. } => "conflict",
            Self::Database(_) => "internal_error",
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::InvalidRequest(e) => e.to_string(),
            Self::MalformedQuery { reason } => reason.clone(),
            Self::UnsupportedEntity { name } => format!("unsupported entity '{}'", name),
            Self::NotFound { resource, id } => format!("{} '{}' not found", resource, id),
            Self::Conflict { resource, reason } => format!("{} {}", resource, reason),
            Self::Database(_) => "an internal error occurred".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Database(detail) = &self {
            // Real cause stays in the logs
            tracing::error!("Database error: {}", detail);
        }
        let body = json!({
            "error": self.code(),
            "message": self.message(),
        });
        (self.status(), Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::Conflict { resource, reason } => Self::Conflict { resource, reason },
            DbError::Sqlx(e) => Self::Database(e.to_string()),
        }
    }
}

impl From<PageError> for ApiError {
    fn from(e: PageError) -> Self {
        match e {
            PageError::UnsupportedEntity { name } => Self::UnsupportedEntity { name },
            PageError::Database(e) => Self::Database(e.to_string()),
            other => Self::InvalidRequest(other),
        }
    }
}
