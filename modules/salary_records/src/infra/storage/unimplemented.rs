//! Placeholder store for reserved backends

use crate::contract::{Backend, SalaryRecord, SalaryRecordsError, StoredRecord};
use crate::domain::repository::RecordStore;
use async_trait::async_trait;

/// Rejects every operation with [`SalaryRecordsError::NotImplemented`]
pub struct UnimplementedStore {
    backend: Backend,
}

impl UnimplementedStore {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    fn reject<T>(&self) -> Result<T, SalaryRecordsError> {
        Err(SalaryRecordsError::NotImplemented {
            backend: self.backend.to_string(),
        })
    }
}

#[async_trait]
impl RecordStore for UnimplementedStore {
    async fn create(&self, _record: &SalaryRecord) -> Result<StoredRecord, SalaryRecordsError> {
        self.reject()
    }

    async fn read(&self, _id: &str) -> Result<StoredRecord, SalaryRecordsError> {
        self.reject()
    }

    async fn update(
        &self,
        _id: &str,
        _record: &SalaryRecord,
    ) -> Result<StoredRecord, SalaryRecordsError> {
        self.reject()
    }

    async fn delete(&self, _id: &str) -> Result<(), SalaryRecordsError> {
        self.reject()
    }
}
