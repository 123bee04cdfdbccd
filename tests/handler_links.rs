mod common;

use axum_test::TestServer;
use serde_json::{Value, json};

async fn get_links(server: &TestServer) -> Value {
    let (name, value) = common::admin_auth();
    let response = server.get("/api/admin/links").add_header(name, value).await;
    response.assert_status_ok();
    response.json::<Value>()
}

async fn post_links(server: &TestServer, payload: Value) {
    let (name, value) = common::admin_auth();
    let response = server
        .post("/api/admin/links")
        .add_header(name, value)
        .json(&payload)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"ok": true}));
}

#[tokio::test]
async fn test_links_defaults_before_any_write() {
    let pool = common::test_pool().await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let links = get_links(&server).await;

    assert_eq!(links["fortune"], "fortune.html");
    assert_eq!(links["job"], "#");
    assert_eq!(links["buttons"].as_object().unwrap().len(), 8);
    assert_eq!(links["buttons"]["support"], "https://t.me/");
}

#[tokio::test]
async fn test_links_write_then_read() {
    let pool = common::test_pool().await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    post_links(
        &server,
        json!({
            "fortune": "luck.html",
            "job": "https://jobs.example",
            "buttons": {"support": "https://t.me/help"}
        }),
    )
    .await;

    let links = get_links(&server).await;
    assert_eq!(links["fortune"], "luck.html");
    assert_eq!(links["job"], "https://jobs.example");
    assert_eq!(links["buttons"]["support"], "https://t.me/help");
}

#[tokio::test]
async fn test_links_missing_button_gets_default() {
    let pool = common::test_pool().await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    post_links(&server, json!({"buttons": {"channel": "https://t.me/chan"}})).await;

    let links = get_links(&server).await;
    assert_eq!(links["buttons"]["channel"], "https://t.me/chan");
    assert_eq!(links["buttons"]["support"], "https://t.me/");
    assert_eq!(links["fortune"], "fortune.html");
}

#[tokio::test]
async fn test_links_write_replaces_previous_document() {
    let pool = common::test_pool().await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    post_links(&server, json!({"fortune": "first.html"})).await;
    post_links(&server, json!({"job": "https://second"})).await;

    let links = get_links(&server).await;
    assert_eq!(links["fortune"], "fortune.html");
    assert_eq!(links["job"], "https://second");
}

#[tokio::test]
async fn test_links_non_string_coerced_to_default() {
    let pool = common::test_pool().await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    post_links(&server, json!({"fortune": 42, "job": null, "buttons": "nope"})).await;

    let links = get_links(&server).await;
    assert_eq!(links["fortune"], "fortune.html");
    assert_eq!(links["job"], "#");
    assert_eq!(links["buttons"]["support"], "https://t.me/");
}

#[tokio::test]
async fn test_links_unknown_keys_preserved() {
    let pool = common::test_pool().await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    post_links(&server, json!({"theme": "dark"})).await;

    assert_eq!(get_links(&server).await["theme"], "dark");
}

#[tokio::test]
async fn test_links_non_json_body_rejected() {
    let pool = common::test_pool().await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let (name, value) = common::admin_auth();
    let response = server
        .post("/api/admin/links")
        .add_header(name, value)
        .text("fortune=x")
        .expect_failure()
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_links_write_requires_auth() {
    let pool = common::test_pool().await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    server
        .post("/api/admin/links")
        .json(&json!({"fortune": "hacked.html"}))
        .await
        .assert_status_unauthorized();

    assert_eq!(get_links(&server).await["fortune"], "fortune.html");
}
