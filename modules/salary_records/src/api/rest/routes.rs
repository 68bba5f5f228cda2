//! Route registration

use super::{dto::*, error::Problem, handlers};
use crate::domain::{HealthReporter, Service};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query,
    },
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

/// Register all REST routes
pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    health: Arc<HealthReporter>,
) -> Router {
    router
        .route("/salary-records", post(create_record_handler))
        .route(
            "/salary-records/{record_id}",
            get(get_record_handler)
                .put(update_record_handler)
                .delete(delete_record_handler),
        )
        .route("/health", get(health_handler))
        .route("/openapi.json", get(handlers::openapi))
        .layer(Extension(service))
        .layer(Extension(health))
}

// ===== Handler wrappers that extract state from Extension =====

async fn create_record_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Result<Query<BackendQuery>, QueryRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SalaryRecordDto>), Problem> {
    handlers::create_record(service, query, payload).await
}

async fn get_record_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
    query: Result<Query<BackendQuery>, QueryRejection>,
) -> Result<Json<SalaryRecordDto>, Problem> {
    handlers::get_record(service, path, query).await
}

async fn update_record_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
    query: Result<Query<BackendQuery>, QueryRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SalaryRecordDto>, Problem> {
    handlers::update_record(service, path, query, payload).await
}

async fn delete_record_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
    query: Result<Query<BackendQuery>, QueryRejection>,
) -> Result<Json<DeleteResponse>, Problem> {
    handlers::delete_record(service, path, query).await
}

async fn health_handler(
    Extension(health): Extension<Arc<HealthReporter>>,
) -> Result<Json<HealthResponse>, Problem> {
    handlers::health(health).await
}
