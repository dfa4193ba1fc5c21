//! User CRUD commands

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pagekit_core::db::UserRepo;
use pagekit_core::models::NewUser;
use pagekit_core::PagekitConfig;
use uuid::Uuid;

use super::{connect, print_json};

#[derive(Parser, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Create a user
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: i32,
        /// Must be unique
        #[arg(long)]
        email: String,
    },
    /// Show a user by id
    Get { id: Uuid },
    /// Update the user currently registered under EMAIL
    ///
    /// Omitted fields keep their current value.
    Update {
        /// Current email of the user
        email: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<i32>,
        #[arg(long)]
        new_email: Option<String>,
    },
    /// Delete a user by id
    Delete { id: Uuid },
}

pub async fn run_user(args: UserArgs, config: &PagekitConfig) -> Result<()> {
    let pool = connect(config).await?;
    let repo = UserRepo::new(&pool);

    match args.command {
        UserCommand::Add { name, age, email } => {
            let user = NewUser::new(&name, age, &email)?;
            let created = repo.create(&user).await.context("Failed to create user")?;
            print_json(&created)
        }
        UserCommand::Get { id } => print_json(&repo.get(id).await?),
        UserCommand::Update {
            email,
            name,
            age,
            new_email,
        } => {
            let current = repo
                .find_by_email(&email)
                .await?
                .with_context(|| format!("No user with email '{email}'"))?;
            let replacement = NewUser::new(
                name.as_deref().unwrap_or(&current.name),
                age.unwrap_or(current.age),
                new_email.as_deref().unwrap_or(&current.email),
            )?;
            let updated = repo
                .update_by_email(&email, &replacement)
                .await
                .context("Failed to update user")?;
            print_json(&updated)
        }
        UserCommand::Delete { id } => {
            let deleted = repo.delete(id).await?;
            tracing::info!(%id, email = %deleted.email, "user deleted");
            print_json(&deleted)
        }
    }
}
