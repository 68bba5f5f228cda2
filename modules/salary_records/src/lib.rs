//! Salary Records Module
//!
//! CRUD over salary records kept in a document store, exposed as a REST
//! resource with a per-request storage backend selector.

// Public exports
pub mod contract;
pub use contract::{Backend, FieldError, SalaryRecord, SalaryRecordsError, StoredRecord};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::SalaryRecordsModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
