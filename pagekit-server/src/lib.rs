//! pagekit-server: HTTP surface for the pagination engine
//!
//! Axum server with:
//! - `GET /api/{entity}` paginated listing (query string → `PaginationRequest`)
//! - CRUD for users and products
//! - CORS (localhost only by default) and request tracing
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
