//! Database layer - connection pool, migrations and repositories
//!
//! Pagination reads live in [`crate::engine`]; this module covers the
//! write paths and schema setup around them.

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_from_config, pool_options};
pub use repos::{DbError, ProductRepo, UserRepo};
