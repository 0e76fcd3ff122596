#![allow(dead_code)]

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tinylink::application::services::UrlService;
use tinylink::domain::repositories::UrlRepository;
use tinylink::infrastructure::persistence::SqliteUrlRepository;
use tinylink::state::AppState;

pub const BASE_URL: &str = "http://localhost:8080";

/// Fresh in-memory database with the `urls` table created.
///
/// A single long-lived connection keeps the in-memory database alive.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    SqliteUrlRepository::new(Arc::new(pool.clone()))
        .init_schema()
        .await
        .unwrap();

    pool
}

pub async fn insert_url(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    sqlx::query("INSERT INTO urls (long_url, short_code) VALUES (?, ?)")
        .bind(url)
        .bind(code)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));
    create_state_with(repository)
}

pub fn create_state_with(repository: Arc<dyn UrlRepository>) -> AppState {
    AppState::new(Arc::new(UrlService::new(repository, BASE_URL)))
}
