use super::store::{DocumentStore, StoreStatus};
use crate::config::DatabaseConfig;
use serde::Serialize;

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const DATABASE_UNINITIALIZED: &str = "⚠️  Available but not initialized";
pub const DATABASE_CONNECTED: &str = "✅ Connected & Working";
pub const VALUE_SET: &str = "✅ Set";
pub const VALUE_NOT_SET: &str = "❌ Not Set";
pub const CONNECTED: &str = "Connected";
pub const NOT_CONNECTED: &str = "Not Connected";

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 80;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    /// Only reported once a store handle exists; `null` otherwise.
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl DiagnosticsReport {
    fn new() -> Self {
        Self {
            backend: BACKEND_RUNNING.to_string(),
            database: DATABASE_UNINITIALIZED.to_string(),
            database_url: None,
            database_name: None,
            connection_status: NOT_CONNECTED.to_string(),
            collections: Vec::new(),
        }
    }

    fn describe_settings(&mut self, database: &DatabaseConfig) {
        let url = if database.url_is_set() {
            VALUE_SET
        } else {
            VALUE_NOT_SET
        };
        self.database_url = Some(url.to_string());
        self.database_name = Some(
            database
                .name
                .clone()
                .unwrap_or_else(|| VALUE_NOT_SET.to_string()),
        );
    }
}

/// Checks the store. Failures are folded into the report, never returned.
pub async fn diagnose(store: &dyn DocumentStore, database: &DatabaseConfig) -> DiagnosticsReport {
    let mut report = DiagnosticsReport::new();

    match store.status() {
        StoreStatus::Unavailable(reason) => {
            tracing::debug!(?reason, "No store handle for diagnostics");
        }
        StoreStatus::Ready => {
            report.describe_settings(database);
            match store.list_collection_names().await {
                Ok(names) => {
                    report.collections = names.into_iter().take(MAX_COLLECTIONS).collect();
                    report.database = DATABASE_CONNECTED.to_string();
                    report.connection_status = CONNECTED.to_string();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Collection listing failed during diagnostics");
                    report.database =
                        format!("⚠️  Connected but Error: {}", truncate(&e.detail()));
                }
            }
        }
    }

    report
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}
