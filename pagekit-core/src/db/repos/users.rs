//! User repository
//!
//! CRUD for the `users` table plus batched bulk insert for seeding.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::{on_unique_violation, DbError};
use crate::models::{NewUser, User};

/// Rows per INSERT when bulk loading (3 binds per row, under the 65535 limit)
pub const INSERT_BATCH_SIZE: usize = 10_000;

const EMAIL_TAKEN: &str = "email already exists";

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user. A duplicate email yields `DbError::Conflict`.
    pub async fn create(&self, user: &NewUser) -> Result<User, DbError> {
        let created: User = sqlx::query_as(
            r#"
            INSERT INTO users (name, age, email)
            VALUES ($1, $2, $3)
            RETURNING id, name, age, email
            "#,
        )
        .bind(user.name())
        .bind(user.age())
        .bind(user.email())
        .fetch_one(self.pool)
        .await
        .map_err(on_unique_violation("user", EMAIL_TAKEN))?;

        tracing::debug!(id = %created.id, "user created");
        Ok(created)
    }

    /// Get a single user by ID.
    pub async fn get(&self, id: Uuid) -> Result<User, DbError> {
        sqlx::query_as("SELECT id, name, age, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("user", id))
    }

    /// Look up a user by exact email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as("SELECT id, name, age, email FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(self.pool)
            .await?;
        Ok(user)
    }

    /// Replace name, age and email of the user with `id`.
    pub async fn update(&self, id: Uuid, user: &NewUser) -> Result<User, DbError> {
        sqlx::query_as(
            r#"
            UPDATE users SET name = $2, age = $3, email = $4
            WHERE id = $1
            RETURNING id, name, age, email
            "#,
        )
        .bind(id)
        .bind(user.name())
        .bind(user.age())
        .bind(user.email())
        .fetch_optional(self.pool)
        .await
        .map_err(on_unique_violation("user", EMAIL_TAKEN))?
        .ok_or_else(|| DbError::not_found("user", id))
    }

    /// Replace name, age and email of the user currently holding `email`.
    pub async fn update_by_email(&self, email: &str, user: &NewUser) -> Result<User, DbError> {
        sqlx::query_as(
            r#"
            UPDATE users SET name = $2, age = $3, email = $4
            WHERE email = $1
            RETURNING id, name, age, email
            "#,
        )
        .bind(email)
        .bind(user.name())
        .bind(user.age())
        .bind(user.email())
        .fetch_optional(self.pool)
        .await
        .map_err(on_unique_violation("user", EMAIL_TAKEN))?
        .ok_or_else(|| DbError::not_found("user", email))
    }

    /// Delete a user, returning the removed row.
    pub async fn delete(&self, id: Uuid) -> Result<User, DbError> {
        sqlx::query_as("DELETE FROM users WHERE id = $1 RETURNING id, name, age, email")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("user", id))
    }

    /// Insert many users in batches of [`INSERT_BATCH_SIZE`].
    ///
    /// Each batch is one statement; a failing batch leaves earlier batches
    /// committed. Returns the number of rows inserted.
    pub async fn insert_many(&self, users: &[NewUser]) -> Result<u64, DbError> {
        let mut inserted = 0;
        for batch in users.chunks(INSERT_BATCH_SIZE) {
            let mut builder: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO users (name, age, email) ");
            builder.push_values(batch, |mut row, user| {
                row.push_bind(user.name())
                    .push_bind(user.age())
                    .push_bind(user.email());
            });
            let result = builder
                .build()
                .execute(self.pool)
                .await
                .map_err(on_unique_violation("user", EMAIL_TAKEN))?;
            inserted += result.rows_affected();
            tracing::debug!(batch = batch.len(), inserted, "user batch inserted");
        }
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_fits_bind_limit() {
        assert!(INSERT_BATCH_SIZE * 3 <= u16::MAX as usize);
    }
}
