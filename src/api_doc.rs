use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::ItemResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "redfish-mock API",
        version = "1.0.0",
        description = "A mock Redfish-style management service serving canned JSON fixtures"
    ),
    paths(
        handlers::root::root_handler,
        handlers::items::item_handler
    ),
    components(
        schemas(ItemResponse, ErrorResponse)
    ),
    tags(
        (name = "mock", description = "Canned fixture routes"),
        (name = "items", description = "Parameter echo endpoint")
    )
)]
pub struct ApiDoc;
