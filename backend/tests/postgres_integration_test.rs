//! End-to-end tests against PostgreSQL
//!
//! Usernames are unique per test run, so tests share the database
//! without truncating it.
//!
//! Run with: TEST_DATABASE_URL=... cargo test --features integration -- --ignored

#![cfg(feature = "integration")]

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_login_and_entries() {
    let app = common::TestApp::with_postgres().await;
    let user = app.create_test_user().await;

    let body = json!({ "content": "This is a test entry :)" });
    let (status, created) = app.post_auth("/api/entry", &body.to_string(), &user.token).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Value = serde_json::from_str(&created).unwrap();

    let (status, listed) = app.get_auth("/api/entry", &user.token).await;
    assert_eq!(status, StatusCode::OK);
    let listed: Value = serde_json::from_str(&listed).unwrap();
    assert_eq!(listed["data"][0], created["data"]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_duplicate_username() {
    let app = common::TestApp::with_postgres().await;
    let user = app.create_test_user().await;

    let body = json!({ "username": user.username, "password": "again" });
    let (status, _) = app.post("/auth/register", &body.to_string()).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_entries_listed_in_creation_order() {
    let app = common::TestApp::with_postgres().await;
    let user = app.create_test_user().await;

    for content in ["first", "second", "third"] {
        let body = json!({ "content": content });
        app.post_auth("/api/entry", &body.to_string(), &user.token).await;
    }

    let (_, listed) = app.get_auth("/api/entry", &user.token).await;
    let listed: Value = serde_json::from_str(&listed).unwrap();
    let contents: Vec<&str> = listed["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["first", "second", "third"]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_readiness_checks_database() {
    let app = common::TestApp::with_postgres().await;

    let (status, body) = app.get("/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"database\""));
}
