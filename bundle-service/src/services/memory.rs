use super::store::{DocumentStore, StoreStatus};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use service_core::error::AppError;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// In-process store for tests and local runs without MongoDB. Filters support
/// top-level equality only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `records` as-is, bypassing validation. Useful for simulating
    /// records written by other tools.
    pub fn with_documents(collection: &str, records: Vec<Document>) -> Self {
        let store = Self::new();
        if let Ok(mut collections) = store.collections.write() {
            let entries = collections.entry(collection.to_string()).or_default();
            for mut record in records {
                ensure_id(&mut record);
                entries.push(record);
            }
        }
        store
    }
}

fn ensure_id(record: &mut Document) -> Bson {
    if let Some(id) = record.get("_id") {
        return id.clone();
    }
    let id = Bson::ObjectId(ObjectId::new());
    record.insert("_id", id.clone());
    id
}

fn filter_matches(record: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| record.get(key) == Some(expected))
}

fn poisoned<E: std::fmt::Display>(e: E) -> AppError {
    AppError::InternalError(anyhow::anyhow!("Memory store lock poisoned: {}", e))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn status(&self) -> StoreStatus {
        StoreStatus::Ready
    }

    async fn insert_document(
        &self,
        collection: &str,
        mut record: Document,
    ) -> Result<String, AppError> {
        let id = ensure_id(&mut record);
        self.collections
            .write()
            .map_err(poisoned)?
            .entry(collection.to_string())
            .or_default()
            .push(record);

        Ok(match id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        })
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, AppError> {
        let collections = self.collections.read().map_err(poisoned)?;
        Ok(collections
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| filter_matches(record, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn count_documents(&self, collection: &str, filter: Document) -> Result<u64, AppError> {
        let collections = self.collections.read().map_err(poisoned)?;
        let count = collections
            .get(collection)
            .map(|records| records.iter().filter(|r| filter_matches(r, &filter)).count())
            .unwrap_or(0);
        Ok(count as u64)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        let collections = self.collections.read().map_err(poisoned)?;
        Ok(collections.keys().cloned().collect())
    }
}
