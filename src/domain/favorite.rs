use serde::Serialize;

/// Body of `POST /app/api/users/{id}/favorites`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub product_id: u32,
}
