//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::{FieldError, SalaryRecordsError};
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize, Deserialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Per-field validation failures
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ProblemField>,
}

/// One invalid field inside a validation problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemField {
    pub field: String,
    pub reason: String,
}

impl From<FieldError> for ProblemField {
    fn from(error: FieldError) -> Self {
        Self {
            field: error.field,
            reason: error.reason,
        }
    }
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            errors: Vec::new(),
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach field errors
    pub fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = errors.into_iter().map(Into::into).collect();
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: SalaryRecordsError) -> Problem {
    match error {
        SalaryRecordsError::Validation { errors } => {
            let fields: Vec<String> = errors.iter().map(ToString::to_string).collect();
            Problem::new(StatusCode::BAD_REQUEST, "Validation Error")
                .with_detail(format!("Invalid salary record: {}", fields.join(", ")))
                .with_errors(errors)
        }

        SalaryRecordsError::InvalidIdentifier { id, .. } => Problem::new(
            StatusCode::BAD_REQUEST,
            "Invalid Identifier",
        )
        .with_detail(format!("'{}' is not a valid record identifier", id)),

        SalaryRecordsError::NotFound { .. } => {
            Problem::new(StatusCode::NOT_FOUND, "Record Not Found").with_detail("Record not found.")
        }

        // Driver details were logged by the store and stay out of the response
        SalaryRecordsError::Storage { .. } => Problem::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Database Error",
        )
        .with_detail("An unexpected database error occurred"),

        SalaryRecordsError::Dependency { message } => Problem::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "Service Unavailable",
        )
        .with_detail(format!("Database connection failed: {}", message)),

        SalaryRecordsError::NotImplemented { backend } => Problem::new(
            StatusCode::NOT_IMPLEMENTED,
            "Not Implemented",
        )
        .with_detail(format!("Backend '{}' is not implemented yet.", backend)),
    }
}

/// Malformed or non-JSON request bodies
pub fn map_json_rejection(rejection: JsonRejection) -> Problem {
    Problem::new(StatusCode::BAD_REQUEST, "Invalid Request Body").with_detail(rejection.body_text())
}

/// Unknown `db` selector values and other bad query strings
pub fn map_query_rejection(rejection: QueryRejection) -> Problem {
    Problem::new(StatusCode::BAD_REQUEST, "Invalid Query Parameters").with_detail(rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (SalaryRecordsError::Validation { errors: vec![] }, 400),
            (
                SalaryRecordsError::InvalidIdentifier {
                    id: "x".to_string(),
                    details: "bad".to_string(),
                },
                400,
            ),
            (SalaryRecordsError::NotFound { id: "x".to_string() }, 404),
            (SalaryRecordsError::Storage { message: "boom".to_string() }, 500),
            (SalaryRecordsError::Dependency { message: "down".to_string() }, 503),
            (SalaryRecordsError::NotImplemented { backend: "mysql".to_string() }, 501),
        ];

        for (error, status) in cases {
            assert_eq!(map_domain_error(error).status, status);
        }
    }

    #[test]
    fn test_storage_error_is_sanitized() {
        let problem = map_domain_error(SalaryRecordsError::Storage {
            message: "Kind: I/O error: Connection reset by peer (os error 104), labels: {}".to_string(),
        });
        let detail = problem.detail.unwrap();
        assert!(!detail.contains("Connection reset"));
        assert!(!detail.contains("os error"));
    }

    #[test]
    fn test_dependency_error_keeps_failure_description() {
        let problem = map_domain_error(SalaryRecordsError::Dependency {
            message: "Server selection timeout".to_string(),
        });
        assert_eq!(
            problem.detail.as_deref(),
            Some("Database connection failed: Server selection timeout")
        );
    }

    #[test]
    fn test_validation_lists_fields() {
        let problem = map_domain_error(SalaryRecordsError::Validation {
            errors: vec![FieldError::missing("Salary")],
        });
        assert_eq!(
            problem.errors,
            vec![ProblemField {
                field: "Salary".to_string(),
                reason: "field required".to_string(),
            }]
        );
        assert!(problem.detail.unwrap().contains("Salary"));
    }
}
