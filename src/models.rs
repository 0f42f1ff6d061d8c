use serde::{Deserialize, Serialize};

/// Query parameters for the item echo endpoint
#[derive(Deserialize, utoipa::ToSchema)]
pub struct ItemQuery {
    pub q: Option<String>,
}

/// Response type for the item echo endpoint
///
/// `q` serializes as JSON null when the query parameter is absent.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemResponse {
    pub item_id: i64,
    pub q: Option<String>,
}
