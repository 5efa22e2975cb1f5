#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use bundle_service::config::{BundleConfig, DatabaseConfig};
use bundle_service::services::{DocumentStore, StoreStatus};
use bundle_service::{build_router, AppState, Application};
use mongodb::bson::Document;
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;

pub const TEST_DATABASE_NAME: &str = "bundle_test";

pub fn test_config() -> BundleConfig {
    BundleConfig {
        common: CoreConfig {
            port: 0,
            log_level: "error".to_string(),
            otlp_endpoint: None,
        },
        database: DatabaseConfig {
            url: Some(Secret::new("mongodb://localhost:27017".to_string())),
            name: Some(TEST_DATABASE_NAME.to_string()),
            server_selection_timeout: Duration::from_secs(1),
        },
    }
}

pub fn unconfigured() -> BundleConfig {
    let mut config = test_config();
    config.database.url = None;
    config.database.name = None;
    config
}

pub fn app(config: BundleConfig, store: Arc<dyn DocumentStore>) -> Router {
    build_router(AppState::new(config, store))
}

/// A running server on a random port, for tests that go over the socket.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<dyn DocumentStore>,
}

impl TestApp {
    pub async fn spawn(store: Arc<dyn DocumentStore>) -> Self {
        let app = Application::build_with_store(test_config(), store)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let store = app.store();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        Self {
            address,
            port,
            store,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

/// Sends a bodiless request and returns the status with the JSON body
/// (`Value::Null` when the body is not JSON).
pub async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Method::GET, uri).await
}

pub async fn post(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Method::POST, uri).await
}

/// A connected store whose every call fails, as a live database with a
/// broken query path would.
pub struct FailingStore {
    pub message: String,
}

impl FailingStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn error(&self) -> AppError {
        AppError::DatabaseError(anyhow::anyhow!(self.message.clone()))
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    fn status(&self) -> StoreStatus {
        StoreStatus::Ready
    }

    async fn insert_document(&self, _: &str, _: Document) -> Result<String, AppError> {
        Err(self.error())
    }

    async fn get_documents(&self, _: &str, _: Document) -> Result<Vec<Document>, AppError> {
        Err(self.error())
    }

    async fn count_documents(&self, _: &str, _: Document) -> Result<u64, AppError> {
        Err(self.error())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Err(self.error())
    }
}
