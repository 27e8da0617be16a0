//! End-to-end tests against a live stub API server.

use std::time::Duration;

use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

async fn get(server: &common::TestServer, path: &str) -> (StatusCode, String, usize, String) {
    let res = common::client()
        .get(server.url(path))
        .send()
        .await
        .expect("server unreachable");

    let status = res.status();
    let content_type = res.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
    let content_length: usize = res.headers()[CONTENT_LENGTH]
        .to_str()
        .unwrap()
        .parse()
        .unwrap();
    let body = res.text().await.unwrap();
    (status, content_type, content_length, body)
}

#[tokio::test]
async fn test_stub_table() {
    let server = common::start_server().await;

    let cases = [
        ("/api/health", 200, json!({"status": "ok", "service": "kenetg-backend"})),
        ("/api/health?x=1", 200, json!({"status": "ok", "service": "kenetg-backend"})),
        (
            "/api/analytics/summary",
            200,
            json!({"status": "ok", "message": "analytics stub (login disabled)"}),
        ),
        (
            "/api/blog?page=3",
            200,
            json!({"status": "ok", "message": "blog stub (login disabled)"}),
        ),
        ("/api/anything/else", 200, json!({"status": "ok", "message": "api stub"})),
        ("/about", 404, json!({"status": "error", "message": "not found"})),
        ("/", 404, json!({"status": "error", "message": "not found"})),
    ];

    for (path, expected_status, expected_body) in cases {
        let (status, content_type, content_length, body) = get(&server, path).await;
        assert_eq!(status.as_u16(), expected_status, "{path}");
        assert_eq!(content_type, "application/json; charset=utf-8", "{path}");
        assert_eq!(content_length, body.len(), "{path}");
        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, expected_body, "{path}");
    }

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_compact_body_bytes() {
    let server = common::start_server().await;

    let (_, _, _, body) = get(&server, "/api/health?x=1").await;
    assert_eq!(body, r#"{"status":"ok","service":"kenetg-backend"}"#);

    let (_, _, _, body) = get(&server, "/about").await;
    assert_eq!(body, r#"{"status":"error","message":"not found"}"#);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_post_is_not_implemented() {
    let server = common::start_server().await;

    let res = common::client()
        .post(server.url("/api/health"))
        .body("{}")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let server = common::start_server().await;
    let (status, ..) = get(&server, "/api/health").await;
    assert_eq!(status, StatusCode::OK);

    server.shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server did not stop")
        .unwrap();
}
