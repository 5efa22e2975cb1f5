//! Document store abstraction.
//!
//! Handlers talk to the store through [`DocumentStore`] only. When no
//! database could be set up at startup the handle is an [`UnavailableStore`],
//! which answers reads with empty results and refuses writes, so every
//! endpoint keeps responding.

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::{self, Bson, DateTime, Document};
use serde::Serialize;
use service_core::error::AppError;
use validator::Validate;

/// Why the store handle is not backed by a database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    /// `DATABASE_URL` or `DATABASE_NAME` is not set.
    NotConfigured,
    /// Settings were present but the client could not be created.
    Uninitialized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    Ready,
    Unavailable(UnavailableReason),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    fn status(&self) -> StoreStatus;

    /// Appends a raw record to `collection` and returns its identifier.
    async fn insert_document(&self, collection: &str, record: Document)
        -> Result<String, AppError>;

    /// All records of `collection` matching `filter`, in store order. An empty
    /// filter matches everything.
    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, AppError>;

    async fn count_documents(&self, collection: &str, filter: Document) -> Result<u64, AppError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;
}

/// Validates `record`, stamps `created_at`/`updated_at` and stores it.
pub async fn create_document<T>(
    store: &dyn DocumentStore,
    collection: &str,
    record: &T,
) -> Result<String, AppError>
where
    T: Serialize + Validate,
{
    record.validate()?;

    let mut document = bson::to_document(record)?;
    let now = Bson::DateTime(DateTime::from_chrono(Utc::now()));
    document.insert("created_at", now.clone());
    document.insert("updated_at", now);

    store.insert_document(collection, document).await
}

/// Stand-in handle used when the database is not reachable at startup.
#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: UnavailableReason,
}

impl UnavailableStore {
    pub fn new(reason: UnavailableReason) -> Self {
        Self { reason }
    }
}

#[async_trait]
impl DocumentStore for UnavailableStore {
    fn status(&self) -> StoreStatus {
        StoreStatus::Unavailable(self.reason)
    }

    async fn insert_document(
        &self,
        collection: &str,
        _record: Document,
    ) -> Result<String, AppError> {
        tracing::warn!(collection = %collection, "Write rejected: database not available");
        Err(AppError::ServiceUnavailable)
    }

    async fn get_documents(
        &self,
        _collection: &str,
        _filter: Document,
    ) -> Result<Vec<Document>, AppError> {
        Ok(Vec::new())
    }

    async fn count_documents(
        &self,
        _collection: &str,
        _filter: Document,
    ) -> Result<u64, AppError> {
        Ok(0)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Err(AppError::ServiceUnavailable)
    }
}
