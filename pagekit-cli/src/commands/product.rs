//! Product CRUD commands

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pagekit_core::db::ProductRepo;
use pagekit_core::models::{NewProduct, ProductUpdate};
use pagekit_core::PagekitConfig;
use uuid::Uuid;

use super::{connect, print_json};

#[derive(Parser, Debug)]
pub struct ProductArgs {
    #[command(subcommand)]
    pub command: ProductCommand,
}

#[derive(Subcommand, Debug)]
pub enum ProductCommand {
    /// Create a product
    Add {
        #[arg(long)]
        name: String,
        /// Decimal price, e.g. 19.99
        #[arg(long)]
        price: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = 0)]
        stock: i32,
    },
    /// Show a product by id
    Get { id: Uuid },
    /// Update selected fields of a product
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<String>,
        /// New description ("" clears it)
        #[arg(long)]
        description: Option<String>,
        /// New category ("" clears it)
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        stock: Option<i32>,
    },
    /// Delete a product by id
    Delete { id: Uuid },
    /// List every product in a category (exact match)
    Category { category: String },
}

pub async fn run_product(args: ProductArgs, config: &PagekitConfig) -> Result<()> {
    let pool = connect(config).await?;
    let repo = ProductRepo::new(&pool);

    match args.command {
        ProductCommand::Add {
            name,
            price,
            description,
            category,
            stock,
        } => {
            let product = NewProduct::new(
                &name,
                description.as_deref(),
                &price,
                category.as_deref(),
                stock,
            )?;
            let created = repo
                .create(&product)
                .await
                .context("Failed to create product")?;
            print_json(&created)
        }
        ProductCommand::Get { id } => print_json(&repo.get(id).await?),
        ProductCommand::Update {
            id,
            name,
            price,
            description,
            category,
            stock,
        } => {
            let update = ProductUpdate::new(
                name.as_deref(),
                description.as_deref(),
                price.as_deref(),
                category.as_deref(),
                stock,
            )?;
            if update.is_empty() {
                tracing::warn!(%id, "no fields to update");
            }
            print_json(&repo.update(id, &update).await?)
        }
        ProductCommand::Delete { id } => {
            let deleted = repo.delete(id).await?;
            tracing::info!(%id, name = %deleted.name, "product deleted");
            print_json(&deleted)
        }
        ProductCommand::Category { category } => {
            print_json(&repo.list_by_category(&category).await?)
        }
    }
}
