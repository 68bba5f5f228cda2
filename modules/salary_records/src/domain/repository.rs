//! Storage gateway interface
//!
//! One implementation per [`Backend`](crate::contract::Backend) variant.
//! Implementations live in `infra/storage`.

use crate::contract::{SalaryRecord, SalaryRecordsError, StoredRecord};
use async_trait::async_trait;

/// CRUD over salary records keyed by the store's encoded identifier
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a new record; the store assigns the identifier
    async fn create(&self, record: &SalaryRecord) -> Result<StoredRecord, SalaryRecordsError>;

    /// Fetch a record by identifier
    async fn read(&self, id: &str) -> Result<StoredRecord, SalaryRecordsError>;

    /// Replace every field of an existing record and return the persisted state
    async fn update(
        &self,
        id: &str,
        record: &SalaryRecord,
    ) -> Result<StoredRecord, SalaryRecordsError>;

    /// Remove exactly one record
    async fn delete(&self, id: &str) -> Result<(), SalaryRecordsError>;
}

/// Lightweight liveness check against a storage engine
#[async_trait]
pub trait StoreProbe: Send + Sync {
    async fn ping(&self) -> Result<(), SalaryRecordsError>;
}
