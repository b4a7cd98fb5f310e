#![allow(dead_code)]

use std::net::IpAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use catalog_db::PoolSettings;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only CORS origin, a 30-second request
/// timeout and the default `per_page` ceiling of 100.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        database_url: "postgres://unused".to_string(),
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        max_per_page: 100,
        pool: PoolSettings::default(),
        run_migrations: false,
    }
}

/// Build the full application router, with every middleware layer, on top
/// of the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(config),
    })
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Insert a title with only the required columns set.
pub async fn insert_title(pool: &PgPool, id: &str) {
    sqlx::query(
        "INSERT INTO netflix_shows (show_id, type, title, release_year)
         VALUES ($1, 'Movie', $2, 2019)",
    )
    .bind(id)
    .bind(format!("Title {id}"))
    .execute(pool)
    .await
    .unwrap();
}

/// Insert `count` titles with zero-padded ids `t000`, `t001`, ...
pub async fn insert_titles(pool: &PgPool, count: usize) {
    for i in 0..count {
        insert_title(pool, &format!("t{i:03}")).await;
    }
}
