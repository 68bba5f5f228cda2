//! Contract error types for salary records
//!
//! These errors are transport-agnostic; `api::rest::error` maps them to HTTP.

use thiserror::Error;

/// A single field that failed payload validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field (e.g. `Years_of_Experience`)
    pub field: String,
    pub reason: String,
}

impl FieldError {
    pub fn missing(field: &str) -> Self {
        Self {
            field: field.to_string(),
            reason: "field required".to_string(),
        }
    }

    pub fn wrong_type(field: &str, expected: &str) -> Self {
        Self {
            field: field.to_string(),
            reason: format!("expected {expected}"),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Salary records domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalaryRecordsError {
    /// Payload is not a valid salary record
    #[error("Validation failed: {}", join_fields(.errors))]
    Validation { errors: Vec<FieldError> },

    /// Identifier string is not a valid store identifier
    #[error("Invalid identifier '{id}': {details}")]
    InvalidIdentifier { id: String, details: String },

    /// No record matches the identifier
    #[error("Record not found: {id}")]
    NotFound { id: String },

    /// Driver or I/O failure while talking to the store
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Store is unreachable (health check)
    #[error("Database connection failed: {message}")]
    Dependency { message: String },

    /// Backend selector names a backend without an implementation
    #[error("Backend '{backend}' is not implemented")]
    NotImplemented { backend: String },
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
