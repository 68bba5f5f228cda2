//! Domain layer - validation, storage gateway interface and services

pub mod health;
pub mod repository;
pub mod service;
pub mod validation;

pub use health::HealthReporter;
pub use repository::{RecordStore, StoreProbe};
pub use service::Service;
