//! Integration tests for `TitleRepo` against a real database.

use catalog_core::pagination::PageRequest;
use catalog_db::repositories::TitleRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn insert_title(pool: &PgPool, id: &str, title: &str) {
    sqlx::query(
        "INSERT INTO netflix_shows (show_id, type, title, release_year)
         VALUES ($1, 'Movie', $2, 2020)",
    )
    .bind(id)
    .bind(title)
    .execute(pool)
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_check(pool: PgPool) {
    catalog_db::health_check(&pool).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_empty_table(pool: PgPool) {
    assert_eq!(TitleRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_orders_by_id(pool: PgPool) {
    // Inserted out of order on purpose.
    insert_title(&pool, "c", "Gamma").await;
    insert_title(&pool, "a", "Alpha").await;
    insert_title(&pool, "b", "Beta").await;

    let titles = TitleRepo::list(&pool, 10, 0).await.unwrap();
    let ids: Vec<&str> = titles.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_respects_limit_and_offset(pool: PgPool) {
    for id in ["a", "b", "c", "d"] {
        insert_title(&pool, id, id).await;
    }

    let titles = TitleRepo::list(&pool, 2, 1).await.unwrap();
    let ids: Vec<&str> = titles.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["b", "c"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_page_returns_rows_and_total(pool: PgPool) {
    for id in ["a", "b", "c"] {
        insert_title(&pool, id, id).await;
    }

    let page = PageRequest::new(2, 2, 100).unwrap();
    let (titles, total) = TitleRepo::list_page(&pool, &page).await.unwrap();

    assert_eq!(titles.len(), 1);
    assert_eq!(titles[0].id, "c");
    assert_eq!(total, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_page_past_end_is_empty(pool: PgPool) {
    insert_title(&pool, "a", "Alpha").await;

    let page = PageRequest::new(99_999, 10, 100).unwrap();
    let (titles, total) = TitleRepo::list_page(&pool, &page).await.unwrap();

    assert!(titles.is_empty());
    assert_eq!(total, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_nullable_columns_decode_as_none(pool: PgPool) {
    insert_title(&pool, "s1", "Sparse").await;

    let titles = TitleRepo::list(&pool, 1, 0).await.unwrap();
    let title = &titles[0];
    assert_eq!(title.kind, "Movie");
    assert_eq!(title.release_year, 2020);
    assert!(title.director.is_none());
    assert!(title.date_added.is_none());

    let json = serde_json::to_value(title).unwrap();
    assert_eq!(json["id"], "s1");
    assert_eq!(json["type"], "Movie");
    assert!(json["director"].is_null());
    assert!(json.get("kind").is_none());
}
