//! Salary prediction tooling
//!
//! Fetches one salary record from the REST API, recodes it into the feature
//! row the trained regression model expects, and prints the prediction.
//! Failures are not recovered: they end the run with the error chain.

pub mod error;
pub mod features;
pub mod fetch;
pub mod model;

pub use error::PredictError;
pub use features::{prepare, FeatureVector, FEATURE_NAMES};
pub use fetch::{RecordFetcher, DEFAULT_API_URL};
pub use model::{LinearRegressionModel, SalaryModel, DEFAULT_MODEL_PATH};

use std::io::Write;
use std::path::Path;

/// Fetch, load, prepare and predict, printing each stage to `out`
pub async fn run(
    fetcher: &RecordFetcher,
    model_path: &Path,
    out: &mut dyn Write,
) -> Result<f64, PredictError> {
    let latest = fetcher.fetch().await?;
    writeln!(out, "Latest data from API: {latest}")?;

    let model = LinearRegressionModel::load(model_path)?;

    let features = prepare(&latest)?;
    writeln!(out, "Prepared data for model:\n{features}")?;

    let predicted = model.predict(&features);
    writeln!(out, "Predicted Salary: {predicted}")?;

    Ok(predicted)
}
