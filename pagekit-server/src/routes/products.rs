//! Product endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use pagekit_core::db::ProductRepo;
use pagekit_core::models::{NewProduct, Product, ProductInput, ProductPatch, ProductUpdate};
use pagekit_core::{Page, Record};

use super::pages::{list_page, QueryPairs};
use crate::error::ApiError;
use crate::extractors::{ApiQuery, RecordId};
use crate::server::AppState;

/// GET /api/products
async fn list_products(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<QueryPairs>,
) -> Result<Json<Page<Record>>, ApiError> {
    list_page(&state, "products".to_string(), params).await
}

/// POST /api/products
async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = NewProduct::try_from(input)?;
    let created = ProductRepo::new(&state.pool).create(&product).await?;
    tracing::info!(id = %created.id, "product created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/products/{id}
async fn get_product(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(ProductRepo::new(&state.pool).get(id).await?))
}

/// PUT /api/products/{id} - absent fields keep their current value
async fn update_product(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>, ApiError> {
    let update = ProductUpdate::try_from(patch)?;
    Ok(Json(ProductRepo::new(&state.pool).update(id, &update).await?))
}

/// DELETE /api/products/{id} - returns the removed product
async fn delete_product(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Product>, ApiError> {
    let deleted = ProductRepo::new(&state.pool).delete(id).await?;
    tracing::info!(%id, "product deleted");
    Ok(Json(deleted))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
