mod common;

use axum::http::StatusCode;
use bundle_service::services::{DocumentStore, MemoryStore, UnavailableReason, UnavailableStore};
use common::{app, get, test_config, unconfigured, FailingStore, TEST_DATABASE_NAME};
use mongodb::bson::doc;
use std::sync::Arc;

#[tokio::test]
async fn reports_uninitialized_without_a_database() {
    let app = app(
        unconfigured(),
        Arc::new(UnavailableStore::new(UnavailableReason::NotConfigured)),
    );

    let (status, body) = get(&app, "/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "⚠️  Available but not initialized");
    assert!(body["database_url"].is_null());
    assert!(body["database_name"].is_null());
    assert!(body.as_object().unwrap().contains_key("database_url"));
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["collections"], serde_json::json!([]));
}

#[tokio::test]
async fn reports_uninitialized_client() {
    let app = app(
        test_config(),
        Arc::new(UnavailableStore::new(UnavailableReason::Uninitialized)),
    );

    let (status, body) = get(&app, "/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "⚠️  Available but not initialized");
    assert!(body["database_url"].is_null());
    assert!(body["database_name"].is_null());
    assert_eq!(body["connection_status"], "Not Connected");
}

#[tokio::test]
async fn reports_connected_store_and_collections() {
    let store = MemoryStore::new();
    store.insert_document("bundle", doc! {}).await.unwrap();

    let app = app(test_config(), Arc::new(store));
    let (status, body) = get(&app, "/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], TEST_DATABASE_NAME);
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["collections"], serde_json::json!(["bundle"]));
}

#[tokio::test]
async fn store_errors_are_reported_not_raised() {
    let long_error = format!("server selection timeout: {}", "x".repeat(200));
    let app = app(test_config(), Arc::new(FailingStore::new(long_error.clone())));

    let (status, body) = get(&app, "/test").await;

    assert_eq!(status, StatusCode::OK);
    let database = body["database"].as_str().unwrap();
    let expected: String = long_error.chars().take(80).collect();
    assert_eq!(database, format!("⚠️  Connected but Error: {}", expected));
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["collections"], serde_json::json!([]));
}

#[tokio::test]
async fn connection_string_is_never_echoed() {
    let app = app(test_config(), Arc::new(MemoryStore::new()));

    let (_, body) = get(&app, "/test").await;

    assert!(!body.to_string().contains("mongodb://"));
}
