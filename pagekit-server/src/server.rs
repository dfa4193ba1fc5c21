//! Axum server setup
//!
//! - Localhost-only CORS unless `cors_permissive`
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use pagekit_core::config::PagekitConfig;
use pagekit_core::models::DEFAULT_PAGE_SIZE;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes;

const LOCAL_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:3030",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:3030",
];

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3030)
    pub bind_addr: SocketAddr,

    /// Allow any origin (default: false = localhost only)
    pub cors_permissive: bool,

    /// Page size applied when a listing request omits `pageSize`
    pub default_page_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            cors_permissive: false,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl From<&PagekitConfig> for ServerConfig {
    fn from(config: &PagekitConfig) -> Self {
        Self {
            bind_addr: config.server.bind,
            cors_permissive: config.server.cors_permissive,
            default_page_size: config.pagination.default_page_size,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub default_page_size: u32,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Assemble all routes around `state`, without CORS or tracing layers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::users::router())
        .merge(routes::products::router())
        .merge(routes::pages::router())
        .with_state(Arc::new(state))
}

fn cors_layer(permissive: bool) -> CorsLayer {
    if permissive {
        tracing::warn!("CORS: permissive mode enabled - all origins allowed");
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = LOCAL_ORIGINS
        .into_iter()
        .map(HeaderValue::from_static)
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// run_server(pool, ServerConfig::default()).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    let state = AppState {
        pool,
        default_page_size: config.default_page_size,
    };

    let app = build_router(state)
        .layer(cors_layer(config.cors_permissive))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        default_page_size = config.default_page_size,
        "server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Resolve when Ctrl+C or SIGTERM arrives.
///
/// A signal handler that cannot be installed is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, starting shutdown"),
        _ = terminate => tracing::info!("received SIGTERM, starting shutdown"),
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 3030);
        assert!(!config.cors_permissive);
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    fn config_from_file_settings() {
        let mut file_config = PagekitConfig::default();
        file_config.server.cors_permissive = true;
        file_config.pagination.default_page_size = 50;

        let config = ServerConfig::from(&file_config);
        assert!(config.cors_permissive);
        assert_eq!(config.default_page_size, 50);
        assert_eq!(config.bind_addr, file_config.server.bind);
    }
}
