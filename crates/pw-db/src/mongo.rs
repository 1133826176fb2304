//! MongoDB implementations of the document store and ledger

use crate::error::{DbError, DbResult};
use crate::record::AppliedRecord;
use crate::traits::{DocumentStore, Ledger};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, IndexOptions, UpdateOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use pw_core::{MongoConfig, Phase, ScriptId};
use std::collections::HashSet;
use std::time::Duration;

/// Connection manager and `DocumentStore` implementation for MongoDB.
///
/// The handle keeps the client's connection pool alive for the duration
/// of a run; dropping the backend releases it, so a failed run still
/// cleans up.
#[derive(Debug)]
pub struct MongoBackend {
    database: Database,
}

impl MongoBackend {
    /// Connect to the deployment described by `config`.
    ///
    /// Validates that a url and database name are configured before any
    /// network I/O, then parses the connection string, applies the
    /// configured timeouts, and pings the server so that an unreachable
    /// deployment fails here rather than mid-run.
    pub async fn connect(config: &MongoConfig) -> DbResult<Self> {
        let url = config.url.as_deref().ok_or(DbError::MissingUrl)?;
        let database_name = config
            .database_name
            .as_deref()
            .ok_or(DbError::MissingDatabaseName)?;

        let mut options = ClientOptions::parse(url)
            .await
            .map_err(|e| DbError::ConnectionError(e.to_string()))?;
        options.connect_timeout = Some(Duration::from_secs(config.options.connect_timeout_secs));
        options.server_selection_timeout = Some(Duration::from_secs(
            config.options.server_selection_timeout_secs,
        ));

        let client =
            Client::with_options(options).map_err(|e| DbError::ConnectionError(e.to_string()))?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| DbError::ConnectionError(e.to_string()))?;

        log::info!("connected to mongodb database '{}'", database_name);
        Ok(Self {
            database: client.database(database_name),
        })
    }

    /// Typed collection accessor
    pub fn collection<T>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoBackend {
    async fn run_command(&self, command: Document) -> DbResult<Document> {
        Ok(self.database.run_command(command, None).await?)
    }

    fn store_type(&self) -> &'static str {
        "mongodb"
    }
}

/// Applied-state ledger backed by a MongoDB collection.
///
/// Documents have the shape `{ phase, id, applied_at }` with a unique
/// index on `(phase, id)`.
pub struct MongoLedger {
    collection: Collection<AppliedRecord>,
}

impl MongoLedger {
    /// Wrap the named collection on `backend`'s database
    pub fn new(backend: &MongoBackend, collection_name: &str) -> Self {
        Self {
            collection: backend.collection(collection_name),
        }
    }

    /// Create the unique `(phase, id)` index if it does not exist.
    ///
    /// Index creation is idempotent on the server side, so this is safe
    /// to call on every run.
    pub async fn ensure_index(&self) -> DbResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "phase": 1, "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection
            .create_index(index, None)
            .await
            .map_err(|e| DbError::StorageUnavailable(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl Ledger for MongoLedger {
    async fn applied_ids(&self, phase: Phase) -> DbResult<HashSet<String>> {
        let records = self.applied_records(phase).await?;
        Ok(records.into_iter().map(|r| r.id).collect())
    }

    async fn applied_records(&self, phase: Phase) -> DbResult<Vec<AppliedRecord>> {
        let filter = doc! { "phase": phase.as_str() };
        let records: Vec<AppliedRecord> = self
            .collection
            .find(filter, None)
            .await
            .map_err(|e| DbError::StorageUnavailable(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| DbError::StorageUnavailable(e.to_string()))?;
        Ok(records)
    }

    async fn mark_applied(&self, phase: Phase, id: &ScriptId) -> DbResult<()> {
        // Upsert keyed on (phase, id): marking the same script twice
        // matches the existing record and changes nothing.
        let filter = doc! { "phase": phase.as_str(), "id": id.as_str() };
        let update = doc! {
            "$setOnInsert": {
                "phase": phase.as_str(),
                "id": id.as_str(),
                "applied_at": mongodb::bson::DateTime::now(),
            }
        };
        let options = UpdateOptions::builder().upsert(true).build();
        self.collection
            .update_one(filter, update, options)
            .await
            .map_err(|e| DbError::StorageUnavailable(e.to_string()))?;
        log::debug!("marked applied: {} {}", phase, id);
        Ok(())
    }
}
