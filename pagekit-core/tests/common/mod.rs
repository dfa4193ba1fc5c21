//! Shared helpers for database-backed tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p pagekit-core -- --ignored

#![allow(dead_code)]

use pagekit_core::db::{create_pool, migrations};
use sqlx::PgPool;
use tokio::sync::OnceCell;
use uuid::Uuid;

static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Connect and make sure the schema exists (once per test binary).
pub async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(&url).await.expect("pool creation failed");
    MIGRATED
        .get_or_init(|| async {
            migrations::run(&pool).await.expect("migrations failed");
        })
        .await;
    pool
}

/// Short unique marker used to isolate rows created by one test.
pub fn tag() -> String {
    Uuid::new_v4().simple().to_string()[..10].to_owned()
}
