//! Common test utilities: in-memory store and probe

#![allow(dead_code)]

use async_trait::async_trait;
use bson::oid::ObjectId;
use parking_lot::RwLock;
use salary_records::domain::{HealthReporter, RecordStore, Service, StoreProbe};
use salary_records::infra::storage::object_id;
use salary_records::infra::storage::UnimplementedStore;
use salary_records::{Backend, SalaryRecord, SalaryRecordsError, SalaryRecordsModule, StoredRecord};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory record store keyed by `ObjectId`, counting every storage call
/// that got past identifier decoding.
#[derive(Default)]
pub struct MockRecordStore {
    data: RwLock<HashMap<ObjectId, SalaryRecord>>,
    io_calls: AtomicUsize,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn io_calls(&self) -> usize {
        self.io_calls.load(Ordering::SeqCst)
    }

    pub fn count(&self) -> usize {
        self.data.read().len()
    }

    fn touch(&self) {
        self.io_calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn create(&self, record: &SalaryRecord) -> Result<StoredRecord, SalaryRecordsError> {
        self.touch();
        let oid = ObjectId::new();
        self.data.write().insert(oid, record.clone());
        Ok(StoredRecord {
            id: object_id::encode(&oid),
            record: record.clone(),
        })
    }

    async fn read(&self, id: &str) -> Result<StoredRecord, SalaryRecordsError> {
        let oid = object_id::decode(id)?;
        self.touch();
        self.data
            .read()
            .get(&oid)
            .map(|record| StoredRecord {
                id: object_id::encode(&oid),
                record: record.clone(),
            })
            .ok_or_else(|| SalaryRecordsError::NotFound { id: id.to_string() })
    }

    async fn update(
        &self,
        id: &str,
        record: &SalaryRecord,
    ) -> Result<StoredRecord, SalaryRecordsError> {
        let oid = object_id::decode(id)?;
        self.touch();
        {
            let mut data = self.data.write();
            match data.get_mut(&oid) {
                Some(existing) => *existing = record.clone(),
                None => return Err(SalaryRecordsError::NotFound { id: id.to_string() }),
            }
        }
        self.read(id).await
    }

    async fn delete(&self, id: &str) -> Result<(), SalaryRecordsError> {
        let oid = object_id::decode(id)?;
        self.touch();
        match self.data.write().remove(&oid) {
            Some(_) => Ok(()),
            None => Err(SalaryRecordsError::NotFound { id: id.to_string() }),
        }
    }
}

/// Store that fails every call the way an unreachable database would
pub struct FailingRecordStore;

#[async_trait]
impl RecordStore for FailingRecordStore {
    async fn create(&self, _record: &SalaryRecord) -> Result<StoredRecord, SalaryRecordsError> {
        Err(storage_failure())
    }

    async fn read(&self, _id: &str) -> Result<StoredRecord, SalaryRecordsError> {
        Err(storage_failure())
    }

    async fn update(
        &self,
        _id: &str,
        _record: &SalaryRecord,
    ) -> Result<StoredRecord, SalaryRecordsError> {
        Err(storage_failure())
    }

    async fn delete(&self, _id: &str) -> Result<(), SalaryRecordsError> {
        Err(storage_failure())
    }
}

fn storage_failure() -> SalaryRecordsError {
    SalaryRecordsError::Storage {
        message: "insert failed: Kind: Server selection timeout, labels: {}".to_string(),
    }
}

/// Probe with a fixed outcome
pub struct MockProbe {
    pub failure: Option<String>,
}

#[async_trait]
impl StoreProbe for MockProbe {
    async fn ping(&self) -> Result<(), SalaryRecordsError> {
        match &self.failure {
            None => Ok(()),
            Some(message) => Err(SalaryRecordsError::Dependency {
                message: message.clone(),
            }),
        }
    }
}

pub fn service_with(store: Arc<MockRecordStore>) -> Service {
    Service::new(store, Arc::new(UnimplementedStore::new(Backend::Mysql)))
}

pub fn module_with(store: Arc<dyn RecordStore>, probe_failure: Option<&str>) -> SalaryRecordsModule {
    let service = Arc::new(Service::new(
        store,
        Arc::new(UnimplementedStore::new(Backend::Mysql)),
    ));
    let health = Arc::new(HealthReporter::new(Arc::new(MockProbe {
        failure: probe_failure.map(str::to_string),
    })));
    SalaryRecordsModule::from_parts(service, health)
}

pub fn engineer_payload() -> Value {
    json!({
        "Age": 32,
        "Gender": "Male",
        "Education_Level": "Bachelor",
        "Job_Title": "Software Engineer",
        "Years_of_Experience": 5,
        "Salary": 90000
    })
}

pub fn scientist_payload() -> Value {
    json!({
        "Age": 45,
        "Gender": "Female",
        "Education_Level": "PhD",
        "Job_Title": "Senior Scientist",
        "Years_of_Experience": 20,
        "Salary": 160000
    })
}

/// Syntactically valid identifier that no store has issued
pub fn unknown_id() -> String {
    ObjectId::new().to_hex()
}
