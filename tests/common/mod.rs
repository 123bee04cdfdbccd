#![allow(dead_code)]

use axum::Router;
use axum::http::{HeaderName, HeaderValue, header};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::path::Path;
use std::sync::Arc;
use visit_tracker::application::services::AuthService;
use visit_tracker::infrastructure::persistence::migrate;
use visit_tracker::routes::build_router;
use visit_tracker::state::AppState;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "test-pass";

pub const DAY_MS: i64 = 86_400_000;

/// Fresh in-memory database with the schema applied.
///
/// A single connection that never expires keeps the in-memory database alive
/// for the whole test.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    migrate(&pool).await.unwrap();
    pool
}

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub async fn insert_visit_at(pool: &SqlitePool, ts: i64, country: &str) -> i64 {
    sqlx::query("INSERT INTO visits (ts, ip, ua, country, path, ref) VALUES (?1, '10.0.0.1', 'test', ?2, '/', '')")
        .bind(ts)
        .bind(country)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn insert_visit_with_path(pool: &SqlitePool, ts: i64, path: &str) -> i64 {
    sqlx::query("INSERT INTO visits (ts, ip, ua, country, path, ref) VALUES (?1, '10.0.0.1', 'test', 'Unknown', ?2, '')")
        .bind(ts)
        .bind(path)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn count_visits(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM visits")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool), AuthService::new(ADMIN_USER, ADMIN_PASS))
}

/// Full application router serving the bundled `public/` directory.
pub fn create_test_app(pool: SqlitePool) -> Router {
    build_router(create_test_state(pool), Path::new("public"))
}

/// `Authorization` header carrying the test admin credentials.
pub fn admin_auth() -> (HeaderName, HeaderValue) {
    basic_auth(ADMIN_USER, ADMIN_PASS)
}

/// `Authorization: Basic ...` for arbitrary credentials.
pub fn basic_auth(user: &str, pass: &str) -> (HeaderName, HeaderValue) {
    let encoded = STANDARD.encode(format!("{user}:{pass}"));
    (
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Basic {encoded}")).unwrap(),
    )
}
