use axum::{routing::get, Json, Router};
use tower_http::trace::TraceLayer;

use crate::fixtures;
use crate::handlers;

/// Build the application router.
///
/// Fixture routes are registered straight from the table; only the root
/// route (cookie side effect) and the item echo route carry handler
/// logic. Anything else falls through to the 404 handler.
pub fn app() -> Router {
    let mut app = Router::new()
        .route(crate::routes::ROOT, get(handlers::root_handler))
        .route(crate::routes::ITEM, get(handlers::item_handler));

    for (path, fixture) in fixtures::table() {
        app = app.route(path, get(move || async move { Json(fixture) }));
    }

    app.fallback(handlers::not_found_handler)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_every_fixture_route_serves_its_document() {
        let app = app();

        for (path, fixture) in fixtures::table() {
            let (status, body) = get_json(app.clone(), path).await;
            assert_eq!(status, StatusCode::OK, "unexpected status for {path}");
            assert_eq!(body, fixture, "body mismatch for {path}");
        }
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let (status, body) = get_json(app(), "/does/not/exist").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("/does/not/exist"));
    }

    #[tokio::test]
    async fn test_listed_but_unmodeled_nic_returns_404() {
        // VLAN1 appears in the NIC collection but has no detail document
        let (status, _) = get_json(
            app(),
            "/redfish/v1/Systems/437XR1138R2/EthernetInterfaces/VLAN1",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_repeated_requests_return_identical_bodies() {
        let app = app();

        let (_, first) = get_json(app.clone(), crate::routes::SERVICE_ROOT).await;
        let (_, second) = get_json(app, crate::routes::SERVICE_ROOT).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_service_root_advertises_protocol_features() {
        // Advertised capability flags are inert data; no route honors them
        let (status, body) = get_json(app(), crate::routes::SERVICE_ROOT).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ProtocolFeaturesSupported"]["SelectQuery"], false);
        assert_eq!(
            body["ProtocolFeaturesSupported"]["ExpandQuery"]["MaxLevels"],
            6
        );
    }
}
