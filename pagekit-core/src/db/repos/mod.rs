//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Payloads arrive validated (`NewUser`, `NewProduct`, ...)
//! - Rely on DB constraints and map violations, no check-then-insert
//! - Every value is a bound parameter

pub mod products;
pub mod users;

pub use products::ProductRepo;
pub use users::UserRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {resource} {reason}")]
    Conflict { resource: &'static str, reason: String },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// Map unique-constraint violations to `Conflict`, pass everything else through.
pub(crate) fn on_unique_violation(
    resource: &'static str,
    reason: &'static str,
) -> impl FnOnce(sqlx::Error) -> DbError {
    move |err| {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return DbError::Conflict {
                    resource,
                    reason: reason.to_owned(),
                };
            }
        }
        DbError::Sqlx(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_unique_errors_pass_through() {
        let err = on_unique_violation("user", "email already exists")(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn error_display() {
        let err = DbError::not_found("user", "abc");
        assert_eq!(err.to_string(), "not found: user 'abc'");
    }
}
