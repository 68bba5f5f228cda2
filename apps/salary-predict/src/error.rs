//! Error types for the prediction tool

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    /// Fetched payload lacks a key the model needs
    #[error("Missing field '{0}' in fetched record")]
    MissingField(String),

    /// Numeric feature holds a non-numeric value
    #[error("Field '{field}' must be numeric, got {value}")]
    InvalidField { field: String, value: String },

    #[error("Failed to fetch data from API: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Failed to fetch data from API: {url} returned {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Invalid model artifact '{path}': {reason}")]
    Model { path: String, reason: String },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
