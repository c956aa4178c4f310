use serde::Serialize;

/// Request body for `POST /api/cars`.
///
/// Carries every creatable field; `id` and `createdAt` are assigned by the
/// server. `description` is left out of the JSON entirely when not provided.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    pub image_url: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub car_type: String,
    pub tags: Vec<String>,
}
