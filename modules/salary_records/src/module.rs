//! Module wiring: stores, services and the HTTP router

use crate::api::rest::routes::register_routes;
use crate::config::Config;
use crate::contract::Backend;
use crate::domain::{HealthReporter, Service};
use crate::infra::storage::{MongoRecordStore, UnimplementedStore};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Salary records module
///
/// Owns the process-wide store client for its whole lifetime; handlers only
/// borrow it through the shared service.
pub struct SalaryRecordsModule {
    service: Arc<Service>,
    health: Arc<HealthReporter>,
}

impl SalaryRecordsModule {
    /// Build the MongoDB store and the services on top of it
    pub async fn init(config: &Config) -> Result<Self> {
        let mongo = Arc::new(MongoRecordStore::connect(&config.mongo).await?);
        let mysql = Arc::new(UnimplementedStore::new(Backend::Mysql));

        let service = Arc::new(Service::new(mongo.clone(), mysql));
        let health = Arc::new(HealthReporter::new(mongo));

        tracing::info!("Salary records module initialized");
        Ok(Self::from_parts(service, health))
    }

    /// Assemble from already-built services
    pub fn from_parts(service: Arc<Service>, health: Arc<HealthReporter>) -> Self {
        Self { service, health }
    }

    /// HTTP router with all routes nested under `base_path`
    pub fn router(&self, base_path: &str) -> Router {
        tracing::info!(base_path, "Registering salary records REST routes");
        let routes = register_routes(Router::new(), self.service.clone(), self.health.clone());

        let prefix = base_path.trim_matches('/');
        let router = if prefix.is_empty() {
            routes
        } else {
            Router::new().nest(&format!("/{prefix}"), routes)
        };

        router.layer(TraceLayer::new_for_http())
    }
}
