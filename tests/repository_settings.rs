mod common;

use serde_json::json;
use std::sync::Arc;
use visit_tracker::domain::repositories::SettingsRepository;
use visit_tracker::infrastructure::persistence::SqliteSettingsRepository;

#[tokio::test]
async fn test_get_missing_key() {
    let pool = common::test_pool().await;
    let repo = SqliteSettingsRepository::new(Arc::new(pool));

    assert!(repo.get("links").await.unwrap().is_none());
}

#[tokio::test]
async fn test_upsert_then_get() {
    let pool = common::test_pool().await;
    let repo = SqliteSettingsRepository::new(Arc::new(pool));

    let value = json!({"fortune": "f.html", "buttons": {"support": "https://t.me/x"}});
    repo.upsert("links", &value, 1_000).await.unwrap();

    let stored = repo.get("links").await.unwrap().unwrap();
    assert_eq!(stored.value, value);
    assert_eq!(stored.updated_at, 1_000);
}

#[tokio::test]
async fn test_upsert_replaces_document() {
    let pool = common::test_pool().await;
    let repo = SqliteSettingsRepository::new(Arc::new(pool.clone()));

    repo.upsert("links", &json!({"a": 1, "b": 2}), 1_000)
        .await
        .unwrap();
    repo.upsert("links", &json!({"c": 3}), 2_000).await.unwrap();

    let stored = repo.get("links").await.unwrap().unwrap();
    assert_eq!(stored.value, json!({"c": 3}));
    assert_eq!(stored.updated_at, 2_000);

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM settings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn test_keys_are_independent() {
    let pool = common::test_pool().await;
    let repo = SqliteSettingsRepository::new(Arc::new(pool));

    repo.upsert("links", &json!({"x": 1}), 1).await.unwrap();
    repo.upsert("other", &json!({"y": 2}), 2).await.unwrap();

    assert_eq!(repo.get("links").await.unwrap().unwrap().value, json!({"x": 1}));
    assert_eq!(repo.get("other").await.unwrap().unwrap().value, json!({"y": 2}));
}

#[tokio::test]
async fn test_corrupted_document_is_an_error() {
    let pool = common::test_pool().await;

    sqlx::query("INSERT INTO settings (key, value_json, updated_at) VALUES ('links', 'not json', 0)")
        .execute(&pool)
        .await
        .unwrap();

    let repo = SqliteSettingsRepository::new(Arc::new(pool));
    assert!(repo.get("links").await.is_err());
}
