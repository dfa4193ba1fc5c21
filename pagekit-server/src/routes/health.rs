//! Health check endpoint

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::server::AppState;

const PING_TIMEOUT: Duration = Duration::from_secs(2);

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database does not answer
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let ping = sqlx::query("SELECT 1").execute(&state.pool);
    let database = match tokio::time::timeout(PING_TIMEOUT, ping).await {
        Ok(Ok(_)) => "ok",
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "health check: database unreachable");
            "unreachable"
        }
        Err(_) => {
            tracing::warn!(timeout_secs = PING_TIMEOUT.as_secs(), "health check: database ping timed out");
            "unreachable"
        }
    };

    Json(HealthResponse {
        status: if database == "ok" { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
