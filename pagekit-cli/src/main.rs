//! pagekit CLI - paginated access to the users and products tables
//!
//! - `migrate`: create tables and indexes
//! - `seed`: bulk-insert generated users
//! - `user` / `product`: single-record CRUD
//! - `list`: one page of any entity, filtered and sorted, printed as JSON
//! - `serve`: the HTTP API

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pagekit_core::PagekitConfig;

mod commands;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "pagekit",
    author,
    version,
    about = "Filter, sort and paginate users and products stored in PostgreSQL"
)]
struct Cli {
    /// Enable debug logging (includes generated SQL)
    #[arg(long, global = true)]
    debug: bool,

    /// Database URL (overrides config file)
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the users and products tables if missing
    Migrate,
    /// Insert generated records
    Seed(commands::seed::SeedArgs),
    /// Create, read, update and delete users
    User(commands::user::UserArgs),
    /// Create, read, update and delete products
    Product(commands::product::ProductArgs),
    /// Fetch one page of an entity as JSON
    List(commands::list::ListArgs),
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    let mut config = PagekitConfig::load().context("Failed to load configuration")?;
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }

    match cli.command {
        Commands::Migrate => commands::run_migrate(&config).await?,
        Commands::Seed(args) => commands::run_seed(args, &config).await?,
        Commands::User(args) => commands::run_user(args, &config).await?,
        Commands::Product(args) => commands::run_product(args, &config).await?,
        Commands::List(args) => commands::run_list(args, &config).await?,
        Commands::Serve(args) => commands::run_serve(args, &config).await?,
    }

    Ok(())
}
