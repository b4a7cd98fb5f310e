//! Shared response envelope types for API handlers.

use catalog_core::pagination::PageMeta;
use serde::Serialize;

/// Paginated `{ "data": [...], "meta": {...} }` response envelope.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}
