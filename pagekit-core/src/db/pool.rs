//! Connection pool sized for paginated reads
//!
//! Every page runs its data and count queries concurrently, so a pool
//! always holds room for at least [`CONNECTIONS_PER_PAGE`] connections.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Connections one paginated request holds at once (data + count).
pub const CONNECTIONS_PER_PAGE: u32 = 2;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a request waits for a free connection before failing.
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool options for `max_connections`, raised to [`CONNECTIONS_PER_PAGE`]
/// when smaller.
pub fn pool_options(max_connections: u32) -> PgPoolOptions {
    let effective = max_connections.max(CONNECTIONS_PER_PAGE);
    if effective != max_connections {
        tracing::warn!(
            requested = max_connections,
            effective,
            "pool too small for concurrent page queries, raising max_connections"
        );
    }
    PgPoolOptions::new()
        .max_connections(effective)
        .acquire_timeout(ACQUIRE_TIMEOUT)
}

/// Connect with [`DEFAULT_MAX_CONNECTIONS`].
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/pagekit").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    connect(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Connect using the `[database]` config section.
pub async fn create_pool_from_config(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    connect(&config.url, config.max_connections).await
}

async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let options = pool_options(max_connections);
    tracing::debug!(
        max_connections = options.get_max_connections(),
        "connecting to database"
    );
    options.connect(database_url).await
}
