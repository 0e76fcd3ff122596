mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use tinylink::api::handlers::redirect_handler;

fn server(pool: sqlx::SqlitePool) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(common::create_test_state(pool));

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let pool = common::test_pool().await;
    common::insert_url(&pool, "redir123", "https://example.com/target").await;
    let server = server(pool);

    let response = server.get("/redir123").await;

    assert_eq!(response.status_code(), 301);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let pool = common::test_pool().await;
    let server = server(pool);

    let response = server.get("/doesnotexist").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "404 page not found");
}

#[tokio::test]
async fn test_redirect_duplicate_code_uses_first_record() {
    let pool = common::test_pool().await;
    common::insert_url(&pool, "dup12345", "https://first.com").await;
    common::insert_url(&pool, "dup12345", "https://second.com").await;
    let server = server(pool);

    let response = server.get("/dup12345").await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "https://first.com");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let pool = common::test_pool().await;
    common::insert_url(&pool, "AbCd1234", "https://example.com").await;
    let server = server(pool);

    server.get("/abcd1234").await.assert_status_not_found();
    assert_eq!(server.get("/AbCd1234").await.status_code(), 301);
}
