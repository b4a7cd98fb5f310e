//! Handlers for the catalog listing.

use axum::extract::State;
use axum::Json;
use catalog_core::pagination::PageMeta;
use catalog_db::models::title::Title;
use catalog_db::repositories::TitleRepo;

use crate::error::AppResult;
use crate::query::Pagination;
use crate::response::PageResponse;
use crate::state::AppState;

/// GET /
///
/// One page of titles ordered by id, with the total row count of the whole
/// catalog. A page past the end returns an empty `data` array.
pub async fn list_titles(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> AppResult<Json<PageResponse<Title>>> {
    let (titles, total) = TitleRepo::list_page(&state.pool, &page).await?;

    tracing::debug!(
        page = page.page(),
        per_page = page.per_page(),
        returned = titles.len(),
        total,
        "Listed titles"
    );

    Ok(Json(PageResponse {
        data: titles,
        meta: PageMeta::new(&page, total),
    }))
}
