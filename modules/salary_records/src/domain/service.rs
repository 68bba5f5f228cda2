//! Domain service - backend dispatch and payload validation

use super::repository::RecordStore;
use super::validation::parse_record;
use crate::contract::{Backend, SalaryRecordsError, StoredRecord};
use serde_json::Value;
use std::sync::Arc;

/// Domain service for salary records
pub struct Service {
    mongo: Arc<dyn RecordStore>,
    mysql: Arc<dyn RecordStore>,
}

impl Service {
    /// Create a new service instance with one store per backend variant
    pub fn new(mongo: Arc<dyn RecordStore>, mysql: Arc<dyn RecordStore>) -> Self {
        Self { mongo, mysql }
    }

    fn store(&self, backend: Backend) -> &dyn RecordStore {
        match backend {
            Backend::Mongo => self.mongo.as_ref(),
            Backend::Mysql => self.mysql.as_ref(),
        }
    }

    /// Validate a payload and insert it as a new record
    pub async fn create_record(
        &self,
        backend: Backend,
        payload: &Value,
    ) -> Result<StoredRecord, SalaryRecordsError> {
        let record = parse_record(payload)?;
        let stored = self.store(backend).create(&record).await?;
        tracing::info!(backend = %backend, id = %stored.id, "Salary record created");
        Ok(stored)
    }

    /// Get a record by identifier
    pub async fn get_record(
        &self,
        backend: Backend,
        id: &str,
    ) -> Result<StoredRecord, SalaryRecordsError> {
        self.store(backend).read(id).await
    }

    /// Validate a payload and replace every field of an existing record
    pub async fn update_record(
        &self,
        backend: Backend,
        id: &str,
        payload: &Value,
    ) -> Result<StoredRecord, SalaryRecordsError> {
        let record = parse_record(payload)?;
        let stored = self.store(backend).update(id, &record).await?;
        tracing::info!(backend = %backend, id = %stored.id, "Salary record updated");
        Ok(stored)
    }

    /// Delete a record by identifier
    pub async fn delete_record(&self, backend: Backend, id: &str) -> Result<(), SalaryRecordsError> {
        self.store(backend).delete(id).await?;
        tracing::info!(backend = %backend, id = %id, "Salary record deleted");
        Ok(())
    }
}
