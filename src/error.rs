use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps each failure to an HTTP status code and a JSON body. Only two
/// failures are reachable at request time: an unknown route and a
/// non-integer `item_id` path parameter.
#[derive(Debug)]
pub enum ApiError {
    /// Path parameter on the item echo endpoint was not an integer
    InvalidItemId(String),
    /// No route registered for the requested path
    RouteNotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidItemId(raw) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Invalid item id: expected an integer, got '{}'", raw),
            ),
            ApiError::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                format!("Not found: {}", path),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
