//! REST DTOs with serde derives for HTTP API
//!
//! Field names follow the stored documents (`Age`, `Education_Level`, ...).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Salary record DTOs =====

/// Salary record response DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SalaryRecordDto {
    #[serde(rename = "Age")]
    #[schema(example = 32)]
    pub age: i64,

    #[serde(rename = "Gender")]
    #[schema(example = "Female")]
    pub gender: String,

    #[serde(rename = "Education_Level")]
    #[schema(example = "Master")]
    pub education_level: String,

    #[serde(rename = "Job_Title")]
    #[schema(example = "Data Analyst")]
    pub job_title: String,

    #[serde(rename = "Years_of_Experience")]
    #[schema(example = 5)]
    pub years_of_experience: i64,

    #[serde(rename = "Salary")]
    #[schema(example = 85000)]
    pub salary: i64,

    /// Store-assigned identifier
    #[schema(example = "65a1f0c2b3d4e5f60718293a")]
    pub id: String,
}

/// Create/replace request body.
///
/// Documentation only: handlers validate the raw JSON so that every missing
/// or mistyped field is reported at once.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SalaryRecordRequest {
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Education_Level")]
    pub education_level: String,
    #[serde(rename = "Job_Title")]
    pub job_title: String,
    #[serde(rename = "Years_of_Experience")]
    pub years_of_experience: i64,
    #[serde(rename = "Salary")]
    pub salary: i64,
}

/// Delete confirmation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "Record deleted")]
    pub detail: String,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self {
            detail: "Record deleted".to_string(),
        }
    }
}

// ===== Health DTOs =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "connected")]
    pub database: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            database: "connected".to_string(),
        }
    }
}

// ===== Query parameters =====

/// Storage backend selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BackendDto {
    #[default]
    Mongo,
    Mysql,
}

/// `?db=` query parameter accepted by every record route
#[derive(Debug, Default, Deserialize)]
pub struct BackendQuery {
    #[serde(default)]
    pub db: BackendDto,
}

// Note: Conversion implementations live in mapper.rs
