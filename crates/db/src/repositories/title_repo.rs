//! Repository for the `netflix_shows` table.

use catalog_core::pagination::PageRequest;
use sqlx::PgPool;

use crate::models::title::Title;

/// Column list for title queries, aliased to the model's field names.
const COLUMNS: &str = "show_id AS id, \"type\" AS kind, title, director, cast_members, \
    country, date_added, release_year::INTEGER AS release_year, rating, duration, \
    listed_in, description";

/// Read-only access to catalog titles.
pub struct TitleRepo;

impl TitleRepo {
    /// Fetch up to `limit` titles starting at `offset`, ordered by id.
    ///
    /// The explicit ordering keeps consecutive pages disjoint.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Title>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM netflix_shows
             ORDER BY show_id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Title>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count every title in the table.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM netflix_shows")
            .fetch_one(pool)
            .await
    }

    /// Fetch one page of titles together with the total row count.
    ///
    /// Both queries run concurrently on separate pooled connections. Under
    /// concurrent writes the page and the total may disagree.
    pub async fn list_page(
        pool: &PgPool,
        page: &PageRequest,
    ) -> Result<(Vec<Title>, i64), sqlx::Error> {
        tracing::debug!(
            page = page.page(),
            limit = page.limit(),
            offset = page.offset(),
            "Fetching titles page"
        );
        tokio::try_join!(
            Self::list(pool, page.limit(), page.offset()),
            Self::count(pool),
        )
    }
}
