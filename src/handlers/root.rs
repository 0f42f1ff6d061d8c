use crate::fixtures;
use crate::routes;
use axum::{
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
    Json,
};

/// Fixed cookie attached to every root response. No session store backs
/// it; the value never varies.
pub const SESSION_COOKIE: &str = "mysession=1242r";

/// GET / handler - greeting document plus the session cookie
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Greeting document", body = serde_json::Value)
    ),
    tag = "mock"
)]
pub async fn root_handler() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, SESSION_COOKIE)]),
        Json(fixtures::api::hello()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    fn test_app() -> Router {
        Router::new().route(crate::routes::ROOT, get(root_handler))
    }

    #[tokio::test]
    async fn test_root_returns_greeting() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json, serde_json::json!({"Hello": "redfish world."}));
    }

    #[tokio::test]
    async fn test_root_sets_session_cookie() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let cookie = response
            .headers()
            .get(SET_COOKIE)
            .expect("Set-Cookie header missing")
            .to_str()
            .unwrap();
        assert!(cookie.contains("mysession=1242r"));
    }
}
