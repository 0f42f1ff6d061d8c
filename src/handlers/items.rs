use crate::error::{ApiError, ErrorResponse};
use crate::models::{ItemQuery, ItemResponse};
use crate::routes;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};

/// GET /items/{item_id} handler - echo the path and query parameters
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("item_id" = i64, Path, description = "Integer item identifier"),
        ("q" = Option<String>, Query, description = "Optional free-form string")
    ),
    responses(
        (status = 200, description = "Echoed parameters", body = ItemResponse),
        (status = 422, description = "item_id is not an integer", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn item_handler(
    Path(item_id): Path<String>,
    Query(query): Query<ItemQuery>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    // Parse and validate the integer id
    let item_id = item_id
        .parse::<i64>()
        .map_err(|_| ApiError::InvalidItemId(item_id.clone()))?;

    Ok((StatusCode::OK, Json(ItemResponse { item_id, q: query.q })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    fn test_app() -> Router {
        Router::new().route(crate::routes::ITEM, get(item_handler))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_item_without_query() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/items/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"item_id": 42, "q": null})
        );
    }

    #[tokio::test]
    async fn test_item_with_query() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/items/42?q=hello")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"item_id": 42, "q": "hello"})
        );
    }

    #[tokio::test]
    async fn test_negative_item_id_parses() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/items/-7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["item_id"], -7);
    }

    #[tokio::test]
    async fn test_non_integer_item_id_rejected() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/items/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let error = body_json(response).await;
        assert!(error["error"].as_str().unwrap().contains("abc"));
        assert!(error.get("item_id").is_none());
    }
}
