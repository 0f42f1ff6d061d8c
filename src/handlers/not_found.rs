use crate::error::ApiError;
use axum::http::Uri;

/// Fallback handler for paths with no registered route
pub async fn not_found_handler(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}
