//! Paginated listing endpoint
//!
//! `GET /api/{entity}?page=&pageSize=&sortBy=&sortOrder=&<filter keys>`

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use pagekit_core::{paginate_and_sort, Page, PaginationRequest, Record};

use crate::error::ApiError;
use crate::extractors::ApiQuery;
use crate::server::AppState;

/// Raw query pairs, order and repeats preserved
pub(crate) type QueryPairs = Vec<(String, String)>;

/// Shared by `/api/{entity}` and the fixed `/api/users`, `/api/products` routes.
pub(crate) async fn list_page(
    state: &AppState,
    entity: String,
    params: QueryPairs,
) -> Result<Json<Page<Record>>, ApiError> {
    let mut request = PaginationRequest::from_params(entity, params)?;
    request
        .page_size
        .get_or_insert(i64::from(state.default_page_size));

    let page = paginate_and_sort(&state.pool, &request).await?;
    tracing::debug!(
        entity = %request.entity,
        page = page.pagination.current_page,
        total = page.pagination.total_count,
        "page served"
    );
    Ok(Json(page))
}

/// GET /api/{entity}
async fn list_entity(
    State(state): State<Arc<AppState>>,
    Path(entity): Path<String>,
    ApiQuery(params): ApiQuery<QueryPairs>,
) -> Result<Json<Page<Record>>, ApiError> {
    list_page(&state, entity, params).await
}

/// Listing routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/{entity}", get(list_entity))
}
