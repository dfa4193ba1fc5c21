//! Schema migrations for the users and products tables
//!
//! Idempotent: every statement uses `IF NOT EXISTS`.

use sqlx::PgPool;

/// Run all migrations
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    // gen_random_uuid() is built in from PostgreSQL 13
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            age INTEGER NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            description VARCHAR(1000),
            price DECIMAL NOT NULL,
            category VARCHAR(100),
            stock INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Sort and range-filter columns
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_users_age ON users (age)",
        "CREATE INDEX IF NOT EXISTS idx_users_name ON users (name)",
        "CREATE INDEX IF NOT EXISTS idx_products_price ON products (price)",
        "CREATE INDEX IF NOT EXISTS idx_products_category ON products (category)",
        "CREATE INDEX IF NOT EXISTS idx_products_stock ON products (stock)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Migrations applied");
    Ok(())
}
