//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use pagekit_core::PagekitConfig;
use pagekit_server::{run_server, ServerConfig};

use super::connect;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: config `[server] bind`, else 127.0.0.1:3030)
    #[arg(long, short = 'b', env = "PAGEKIT_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &PagekitConfig) -> Result<()> {
    let mut server_config = ServerConfig::from(config);
    if let Some(bind) = args.bind {
        server_config.bind_addr = bind;
    }
    server_config.cors_permissive |= args.cors_permissive;

    let pool = connect(config).await?;

    tracing::info!("Starting pagekit server on {}", server_config.bind_addr);
    run_server(pool, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
