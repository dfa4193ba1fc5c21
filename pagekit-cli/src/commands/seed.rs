//! Bulk data generation

use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pagekit_core::db::UserRepo;
use pagekit_core::models::seed::random_users;
use pagekit_core::PagekitConfig;

use super::connect;

#[derive(Parser, Debug)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub target: SeedTarget,
}

#[derive(Subcommand, Debug)]
pub enum SeedTarget {
    /// Insert random users (unique emails, ages 18-77)
    Users {
        /// Number of users to insert
        #[arg(long, short = 'n', default_value_t = 1000)]
        count: usize,
    },
}

pub async fn run_seed(args: SeedArgs, config: &PagekitConfig) -> Result<()> {
    let pool = connect(config).await?;

    match args.target {
        SeedTarget::Users { count } => {
            let started = Instant::now();
            let users = random_users(count);
            let inserted = UserRepo::new(&pool)
                .insert_many(&users)
                .await
                .context("Failed to insert users")?;
            tracing::info!(
                inserted,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "users seeded"
            );
            println!("Inserted {inserted} users");
        }
    }

    Ok(())
}
