//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use pagekit_core::models::ValidationError;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::ApiError;

/// Record id from the `{id}` path segment, rejected as JSON 400 when malformed
pub struct RecordId(pub Uuid);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        let uuid = Uuid::parse_str(&id).map_err(|_| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "id",
                reason: "invalid UUID format",
            })
        })?;

        Ok(Self(uuid))
    }
}

/// `Query<T>` whose rejection is the JSON 400 body instead of plain text
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::MalformedQuery {
                reason: rejection.body_text(),
            })?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use serde::Deserialize;
    use serde_json::Value;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Limit {
        n: u32,
    }

    async fn limit(ApiQuery(limit): ApiQuery<Limit>) -> String {
        limit.n.to_string()
    }

    async fn call(uri: &str) -> (StatusCode, Vec<u8>) {
        let app = Router::new().route("/", get(limit));
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn query_rejection_is_json() {
        let (status, bytes) = call("/?n=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "invalid_request");
        assert!(body["message"].as_str().unwrap().contains("query string"));
    }

    #[tokio::test]
    async fn well_formed_query_passes_through() {
        let (status, bytes) = call("/?n=7").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(bytes, b"7");
    }
}
