//! Command implementations for the pagekit CLI

pub mod list;
pub mod product;
pub mod seed;
pub mod serve;
pub mod user;

use anyhow::{Context, Result};
use pagekit_core::db::{create_pool_from_config, migrations};
use pagekit_core::PagekitConfig;
use serde::Serialize;
use sqlx::PgPool;

pub use list::run_list;
pub use product::run_product;
pub use seed::run_seed;
pub use serve::run_serve;
pub use user::run_user;

/// Open a pool from the `[database]` config section.
pub(crate) async fn connect(config: &PagekitConfig) -> Result<PgPool> {
    create_pool_from_config(&config.database)
        .await
        .context("Failed to connect to database. Set --database-url, DATABASE_URL or ~/.pagekit/config.toml")
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Create tables and indexes
pub async fn run_migrate(config: &PagekitConfig) -> Result<()> {
    let pool = connect(config).await?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("migrations applied");
    Ok(())
}
