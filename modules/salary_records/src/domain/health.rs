//! Storage liveness reporting

use super::repository::StoreProbe;
use crate::contract::SalaryRecordsError;
use std::sync::Arc;

pub struct HealthReporter {
    probe: Arc<dyn StoreProbe>,
}

impl HealthReporter {
    pub fn new(probe: Arc<dyn StoreProbe>) -> Self {
        Self { probe }
    }

    /// Ping the store once. Any failure is reported as
    /// [`SalaryRecordsError::Dependency`] carrying the underlying description.
    pub async fn check(&self) -> Result<(), SalaryRecordsError> {
        match self.probe.ping().await {
            Ok(()) => Ok(()),
            Err(SalaryRecordsError::Dependency { message }) => {
                tracing::warn!(error = %message, "Storage health check failed");
                Err(SalaryRecordsError::Dependency { message })
            }
            Err(other) => {
                tracing::warn!(error = %other, "Storage health check failed");
                Err(SalaryRecordsError::Dependency {
                    message: other.to_string(),
                })
            }
        }
    }
}
