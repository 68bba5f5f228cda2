//! Trained regression model loading

use crate::error::PredictError;
use crate::features::{FeatureVector, FEATURE_NAMES};
use serde::Deserialize;
use std::path::Path;

/// Artifact path used when none is given
pub const DEFAULT_MODEL_PATH: &str = "model.json";

/// A fitted model that maps one feature row to a salary
pub trait SalaryModel {
    fn predict(&self, features: &FeatureVector) -> f64;
}

/// Ordinary least squares model exported as JSON:
///
/// ```json
/// { "feature_names": ["Age", "Gender", "Education Level", "Years of Experience"],
///   "coefficients": [1200.0, -3000.0, 9000.0, 4500.0],
///   "intercept": 10000.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinearRegressionModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearRegressionModel {
    /// Read and check an artifact from disk
    pub fn load(path: &Path) -> Result<Self, PredictError> {
        let raw = std::fs::read_to_string(path).map_err(|e| model_error(path, e.to_string()))?;
        let model: Self = serde_json::from_str(&raw).map_err(|e| model_error(path, e.to_string()))?;
        model.check().map_err(|reason| model_error(path, reason))?;

        tracing::debug!(path = %path.display(), "Loaded regression model");
        Ok(model)
    }

    /// The model must have been fitted on exactly the transformer's columns
    fn check(&self) -> Result<(), String> {
        if self.feature_names != FEATURE_NAMES {
            return Err(format!(
                "expected features {:?}, artifact has {:?}",
                FEATURE_NAMES, self.feature_names
            ));
        }
        if self.coefficients.len() != FEATURE_NAMES.len() {
            return Err(format!(
                "expected {} coefficients, artifact has {}",
                FEATURE_NAMES.len(),
                self.coefficients.len()
            ));
        }
        Ok(())
    }
}

impl SalaryModel for LinearRegressionModel {
    fn predict(&self, features: &FeatureVector) -> f64 {
        self.coefficients
            .iter()
            .zip(features.as_array())
            .fold(self.intercept, |acc, (coef, x)| acc + coef * x)
    }
}

fn model_error(path: &Path, reason: String) -> PredictError {
    PredictError::Model {
        path: path.display().to_string(),
        reason,
    }
}
