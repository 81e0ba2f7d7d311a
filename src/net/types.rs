//! Item records as serialized by the backend REST API.
//!
//! Both kinds share the same shape except for the kind-specific date and
//! location field names, which the backend keeps distinct.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A lost-item report returned by `GET /api/ai/lost/`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LostItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub date_lost: String,
    pub location_lost: String,
    pub contact_info: String,
    /// Server-relative media path, e.g. `/media/lost_products/keys.jpg`.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A found-item report returned by `GET /api/ai/found/`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FoundItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub date_found: String,
    pub location_found: String,
    pub contact_info: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
