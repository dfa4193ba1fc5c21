//! Product repository
//!
//! `price` is bound as text and cast to `numeric`, and read back as text,
//! so values round-trip exactly.

use sqlx::PgPool;
use uuid::Uuid;

use super::DbError;
use crate::models::{NewProduct, Product, ProductUpdate};

const PRODUCT_COLUMNS: &str = "id, name, description, price::text AS price, category, stock";

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a product.
    pub async fn create(&self, product: &NewProduct) -> Result<Product, DbError> {
        let created: Product = sqlx::query_as(&format!(
            r#"
            INSERT INTO products (name, description, price, category, stock)
            VALUES ($1, $2, $3::numeric, $4, $5)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(product.name())
        .bind(product.description())
        .bind(product.price())
        .bind(product.category())
        .bind(product.stock())
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = %created.id, "product created");
        Ok(created)
    }

    /// Get a single product by ID.
    pub async fn get(&self, id: Uuid) -> Result<Product, DbError> {
        sqlx::query_as(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("product", id))
    }

    /// Apply a partial update; unset fields keep their current value and
    /// cleared nullable fields become NULL.
    pub async fn update(&self, id: Uuid, update: &ProductUpdate) -> Result<Product, DbError> {
        if update.is_empty() {
            return self.get(id).await;
        }

        sqlx::query_as(&format!(
            r#"
            UPDATE products SET
                name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                price = COALESCE($5::numeric, price),
                category = CASE WHEN $6 THEN $7 ELSE category END,
                stock = COALESCE($8, stock)
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(update.name.as_deref())
        .bind(update.description.is_some())
        .bind(update.description.clone().flatten())
        .bind(update.price.as_deref())
        .bind(update.category.is_some())
        .bind(update.category.clone().flatten())
        .bind(update.stock)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("product", id))
    }

    /// Delete a product, returning the removed row.
    pub async fn delete(&self, id: Uuid) -> Result<Product, DbError> {
        sqlx::query_as(&format!(
            "DELETE FROM products WHERE id = $1 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("product", id))
    }

    /// Products whose category equals `category` exactly.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category = $1 ORDER BY id"
        ))
        .bind(category)
        .fetch_all(self.pool)
        .await?;
        Ok(products)
    }
}
