//! Catalog title model.

use catalog_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `netflix_shows` table.
///
/// Field names are the JSON wire contract. `show_id` is exposed as `id` and
/// the `type` column as `type`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Title {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub director: Option<String>,
    pub cast_members: Option<String>,
    pub country: Option<String>,
    pub date_added: Option<Timestamp>,
    pub release_year: i32,
    pub rating: Option<String>,
    pub duration: Option<String>,
    pub listed_in: Option<String>,
    pub description: Option<String>,
}
