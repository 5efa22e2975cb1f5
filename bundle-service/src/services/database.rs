use super::store::{DocumentStore, StoreStatus, UnavailableReason, UnavailableStore};
use crate::config::DatabaseConfig;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::ClientOptions,
    Client as MongoClient, Collection, Database,
};
use secrecy::ExposeSecret;
use service_core::error::AppError;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    /// Builds the client. The driver connects lazily, so an unreachable server
    /// only surfaces on the first operation.
    pub async fn connect(
        uri: &str,
        database: &str,
        server_selection_timeout: Duration,
    ) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::from(e)
        })?;
        options.app_name = Some("bundle-service".to_string());
        options.server_selection_timeout = Some(server_selection_timeout);

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn status(&self) -> StoreStatus {
        StoreStatus::Ready
    }

    async fn insert_document(
        &self,
        collection: &str,
        record: Document,
    ) -> Result<String, AppError> {
        let result = self
            .collection(collection)
            .insert_one(record, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Insert failed: {}", e);
                AppError::from(e)
            })?;

        let id = match result.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => result.inserted_id.to_string(),
        };
        tracing::debug!(collection = %collection, id = %id, "Inserted document");
        Ok(id)
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, AppError> {
        let mut cursor = self
            .collection(collection)
            .find(filter, None)
            .await
            .map_err(AppError::from)?;

        let mut documents = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(AppError::from)? {
            documents.push(document);
        }
        Ok(documents)
    }

    async fn count_documents(&self, collection: &str, filter: Document) -> Result<u64, AppError> {
        self.collection(collection)
            .count_documents(filter, None)
            .await
            .map_err(AppError::from)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db
            .list_collection_names(None)
            .await
            .map_err(AppError::from)
    }
}

/// Creates the process-wide store handle. Never fails: missing settings or a
/// client that cannot be built yield an [`UnavailableStore`].
pub async fn connect_store(config: &DatabaseConfig) -> Arc<dyn DocumentStore> {
    let (Some(url), Some(name)) = (config.url.as_ref(), config.name.as_deref()) else {
        tracing::warn!(
            url_set = config.url.is_some(),
            name_set = config.name.is_some(),
            "DATABASE_URL or DATABASE_NAME not set; running without a database"
        );
        return Arc::new(UnavailableStore::new(UnavailableReason::NotConfigured));
    };

    match MongoStore::connect(url.expose_secret(), name, config.server_selection_timeout).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "Database unavailable; continuing in degraded mode");
            Arc::new(UnavailableStore::new(UnavailableReason::Uninitialized))
        }
    }
}
