//! Tracing setup for the pagekit CLI
//!
//! Usage:
//!   pagekit --debug ...               # Debug logging
//!   RUST_LOG=pagekit_core=debug ...   # Fine-grained log control (shows built SQL)
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Debug level unless RUST_LOG is set explicitly
    pub debug: bool,
}

/// Initialize console tracing.
pub fn init_tracing(config: &TracingConfig) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
