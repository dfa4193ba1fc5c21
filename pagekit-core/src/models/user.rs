//! User records and validated user payloads

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::validation::{non_negative, required_text, ValidationError};

const MAX_NAME_LEN: usize = 255;
const MAX_EMAIL_LEN: usize = 255;

/// `local@domain.tld`, no whitespace
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex")
});

/// User row
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub email: String,
}

/// Validated user payload for inserts and full updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    age: i32,
    email: String,
}

impl NewUser {
    /// Validate a user payload.
    ///
    /// # Rules
    /// - name: non-empty after trimming, max 255 characters
    /// - age: zero or greater
    /// - email: `local@domain.tld` shape, max 255 characters
    ///
    /// # Example
    /// ```
    /// use pagekit_core::models::NewUser;
    ///
    /// assert!(NewUser::new("Alice", 30, "alice@example.com").is_ok());
    /// assert!(NewUser::new("", 30, "alice@example.com").is_err());
    /// assert!(NewUser::new("Alice", -1, "alice@example.com").is_err());
    /// assert!(NewUser::new("Alice", 30, "not-an-email").is_err());
    /// ```
    pub fn new(name: &str, age: i32, email: &str) -> Result<Self, ValidationError> {
        let name = required_text(name, "name", MAX_NAME_LEN)?;
        let age = non_negative(age, "age")?;
        let email = required_text(email, "email", MAX_EMAIL_LEN)?;
        if !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must be a valid email address",
            });
        }
        Ok(Self { name, age, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Unvalidated user payload as received over the wire
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserInput {
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl TryFrom<UserInput> for NewUser {
    type Error = ValidationError;

    fn try_from(input: UserInput) -> Result<Self, Self::Error> {
        Self::new(&input.name, input.age, &input.email)
    }
}
