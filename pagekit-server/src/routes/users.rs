//! User endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use pagekit_core::db::UserRepo;
use pagekit_core::models::{NewUser, User, UserInput};
use pagekit_core::{Page, Record};

use super::pages::{list_page, QueryPairs};
use crate::error::ApiError;
use crate::extractors::{ApiQuery, RecordId};
use crate::server::AppState;

/// GET /api/users
async fn list_users(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<QueryPairs>,
) -> Result<Json<Page<Record>>, ApiError> {
    list_page(&state, "users".to_string(), params).await
}

/// POST /api/users
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(input): Json<UserInput>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = NewUser::try_from(input)?;
    let created = UserRepo::new(&state.pool).create(&user).await?;
    tracing::info!(id = %created.id, "user created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/users/{id}
async fn get_user(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<User>, ApiError> {
    Ok(Json(UserRepo::new(&state.pool).get(id).await?))
}

/// PUT /api/users/{id} - replace name, age and email
async fn update_user(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    Json(input): Json<UserInput>,
) -> Result<Json<User>, ApiError> {
    let user = NewUser::try_from(input)?;
    Ok(Json(UserRepo::new(&state.pool).update(id, &user).await?))
}

/// DELETE /api/users/{id} - returns the removed user
async fn delete_user(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<User>, ApiError> {
    let deleted = UserRepo::new(&state.pool).delete(id).await?;
    tracing::info!(%id, "user deleted");
    Ok(Json(deleted))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
