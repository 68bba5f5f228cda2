//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, map_json_rejection, map_query_rejection, Problem},
    openapi::ApiDoc,
};
use crate::domain::{HealthReporter, Service};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use utoipa::OpenApi;

// ===== Salary record handlers =====

/// Create a record from a full payload
pub async fn create_record(
    service: Arc<Service>,
    query: Result<Query<BackendQuery>, QueryRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SalaryRecordDto>), Problem> {
    let Query(query) = query.map_err(map_query_rejection)?;
    let Json(payload) = payload.map_err(map_json_rejection)?;

    let stored = service
        .create_record(query.db.into(), &payload)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(stored.into())))
}

/// Get a record by identifier
pub async fn get_record(
    service: Arc<Service>,
    Path(record_id): Path<String>,
    query: Result<Query<BackendQuery>, QueryRejection>,
) -> Result<Json<SalaryRecordDto>, Problem> {
    let Query(query) = query.map_err(map_query_rejection)?;

    let stored = service
        .get_record(query.db.into(), &record_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(stored.into()))
}

/// Replace every field of a record
pub async fn update_record(
    service: Arc<Service>,
    Path(record_id): Path<String>,
    query: Result<Query<BackendQuery>, QueryRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SalaryRecordDto>, Problem> {
    let Query(query) = query.map_err(map_query_rejection)?;
    let Json(payload) = payload.map_err(map_json_rejection)?;

    let stored = service
        .update_record(query.db.into(), &record_id, &payload)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(stored.into()))
}

/// Delete a record
pub async fn delete_record(
    service: Arc<Service>,
    Path(record_id): Path<String>,
    query: Result<Query<BackendQuery>, QueryRejection>,
) -> Result<Json<DeleteResponse>, Problem> {
    let Query(query) = query.map_err(map_query_rejection)?;

    service
        .delete_record(query.db.into(), &record_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(DeleteResponse::deleted()))
}

// ===== Health & docs =====

/// Ping the store
pub async fn health(reporter: Arc<HealthReporter>) -> Result<Json<HealthResponse>, Problem> {
    reporter.check().await.map_err(map_domain_error)?;
    Ok(Json(HealthResponse::healthy()))
}

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
