//! Query parameter extraction for API handlers.

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use catalog_core::error::CoreError;
use catalog_core::pagination::PageRequest;

use crate::error::AppError;
use crate::state::AppState;

/// Validated `?page=&per_page=` parameters.
///
/// Rejects with 400 when a parameter is not an integer, is out of range, or
/// when the unsupported `limit` parameter is present. The `per_page` ceiling
/// comes from [`ServerConfig::max_per_page`](crate::config::ServerConfig).
///
/// ```ignore
/// async fn list(Pagination(page): Pagination) -> AppResult<Json<()>> {
///     // page.offset() and page.limit() are safe to bind here
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageRequest);

impl FromRequestParts<AppState> for Pagination {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|e| CoreError::Validation(format!("Malformed query string: {e}")))?;

        let request = PageRequest::from_query(&params, state.config.max_per_page)?;
        Ok(Pagination(request))
    }
}
