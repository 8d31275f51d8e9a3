//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, body_string, get, SMALL_GIF};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns the 404 page
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_route_returns_404_page(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_string(response).await;
    assert!(html.contains("404 Not Found"));
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: uploaded images are served under /media
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn media_files_are_served(pool: PgPool) {
    let media = tempfile::tempdir().unwrap();
    let dir = media.path().join("portfolio/images/projects");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("small.gif"), SMALL_GIF).unwrap();

    let app = common::build_test_app_with_media(pool.clone(), media.path().to_path_buf());
    let response = get(app, "/media/portfolio/images/projects/small.gif").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "image/gif");
    assert_eq!(body_bytes(response).await, SMALL_GIF);

    let app = common::build_test_app_with_media(pool, media.path().to_path_buf());
    let response = get(app, "/media/portfolio/images/projects/missing.gif").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
