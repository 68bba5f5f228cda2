//! MongoDB record store

use super::document::{from_document, to_document, ID_KEY};
use super::object_id;
use crate::config::MongoConfig;
use crate::contract::{SalaryRecord, SalaryRecordsError, StoredRecord};
use crate::domain::repository::{RecordStore, StoreProbe};
use anyhow::{Context, Result};
use async_trait::async_trait;
use bson::{doc, Document};
use mongodb::options::{ClientOptions, Tls, TlsOptions};
use mongodb::{Client, Collection};
use std::fmt;
use std::future::IntoFuture;
use std::time::Duration;

/// Record store backed by one MongoDB collection.
///
/// The client owns the process-wide connection pool; clones share it.
#[derive(Clone)]
pub struct MongoRecordStore {
    client: Client,
    collection: Collection<Document>,
    op_timeout: Duration,
}

impl MongoRecordStore {
    /// Build the client from configuration.
    ///
    /// The driver connects lazily, so this does not fail for an unreachable
    /// server; the first operation (or health check) does.
    pub async fn connect(config: &MongoConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .context("Invalid MongoDB connection URI")?;
        options.server_selection_timeout = Some(config.server_selection_timeout);
        options.connect_timeout = Some(config.connect_timeout);
        if config.tls_allow_invalid_certificates {
            let mut tls = TlsOptions::default();
            tls.allow_invalid_certificates = Some(true);
            options.tls = Some(Tls::Enabled(tls));
        }

        let client = Client::with_options(options).context("Failed to create MongoDB client")?;
        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "MongoDB record store configured"
        );

        Ok(Self {
            client,
            collection,
            op_timeout: config.socket_timeout,
        })
    }

    /// Run one driver call under the operation timeout.
    ///
    /// Driver errors are logged in full; the caller decides how to classify
    /// the failure.
    async fn timed<T, F>(&self, operation: &'static str, call: F) -> Result<T, OpFailure>
    where
        F: IntoFuture<Output = mongodb::error::Result<T>>,
    {
        match tokio::time::timeout(self.op_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::error!(operation, error = ?e, "MongoDB operation failed");
                Err(OpFailure::Driver(e))
            }
            Err(_) => {
                tracing::error!(operation, timeout = ?self.op_timeout, "MongoDB operation timed out");
                Err(OpFailure::TimedOut(self.op_timeout))
            }
        }
    }

    /// [`Self::timed`] for record operations: failures are storage errors
    /// carrying the operation name and the driver's summary.
    async fn bounded<T, F>(&self, operation: &'static str, call: F) -> Result<T, SalaryRecordsError>
    where
        F: IntoFuture<Output = mongodb::error::Result<T>>,
    {
        self.timed(operation, call)
            .await
            .map_err(|failure| {
                let message = match &failure {
                    OpFailure::Driver(e) => format!("{operation} failed: {e}"),
                    OpFailure::TimedOut(_) => format!("{operation} {failure}"),
                };
                SalaryRecordsError::Storage { message }
            })
    }

    async fn find(&self, id: &str, oid: bson::oid::ObjectId) -> Result<StoredRecord, SalaryRecordsError> {
        self.bounded("find", self.collection.find_one(doc! { "_id": oid }))
            .await?
            .map(from_document)
            .transpose()?
            .ok_or_else(|| SalaryRecordsError::NotFound { id: id.to_string() })
    }
}

/// Why a bounded driver call did not produce a value
#[derive(Debug)]
enum OpFailure {
    Driver(mongodb::error::Error),
    TimedOut(Duration),
}

impl fmt::Display for OpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Driver(e) => write!(f, "{e}"),
            Self::TimedOut(timeout) => write!(f, "timed out after {timeout:?}"),
        }
    }
}

#[async_trait]
impl RecordStore for MongoRecordStore {
    async fn create(&self, record: &SalaryRecord) -> Result<StoredRecord, SalaryRecordsError> {
        let result = self
            .bounded("insert", self.collection.insert_one(to_document(record)))
            .await?;

        let oid = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| SalaryRecordsError::Storage {
                message: format!("insert returned a non-ObjectId {ID_KEY}"),
            })?;

        Ok(StoredRecord {
            id: object_id::encode(&oid),
            record: record.clone(),
        })
    }

    async fn read(&self, id: &str) -> Result<StoredRecord, SalaryRecordsError> {
        let oid = object_id::decode(id)?;
        self.find(id, oid).await
    }

    async fn update(
        &self,
        id: &str,
        record: &SalaryRecord,
    ) -> Result<StoredRecord, SalaryRecordsError> {
        let oid = object_id::decode(id)?;
        let result = self
            .bounded(
                "replace",
                self.collection
                    .replace_one(doc! { "_id": oid }, to_document(record)),
            )
            .await?;

        if result.matched_count == 0 {
            return Err(SalaryRecordsError::NotFound { id: id.to_string() });
        }

        // Return what was persisted, not what was sent
        self.find(id, oid).await
    }

    async fn delete(&self, id: &str) -> Result<(), SalaryRecordsError> {
        let oid = object_id::decode(id)?;
        let result = self
            .bounded("delete", self.collection.delete_one(doc! { "_id": oid }))
            .await?;

        if result.deleted_count == 1 {
            Ok(())
        } else {
            Err(SalaryRecordsError::NotFound { id: id.to_string() })
        }
    }
}

#[async_trait]
impl StoreProbe for MongoRecordStore {
    async fn ping(&self) -> Result<(), SalaryRecordsError> {
        let admin = self.client.database("admin");
        self.timed("ping", admin.run_command(doc! { "ping": 1 }))
            .await
            .map(|_| ())
            .map_err(|failure| SalaryRecordsError::Dependency {
                message: failure.to_string(),
            })
    }
}
