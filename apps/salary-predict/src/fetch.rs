//! Record retrieval from the salary records API

use crate::error::PredictError;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

/// Endpoint read when no URL is given.
///
/// `latest` is not a record identifier: the API answers it with 400 until a
/// dedicated lookup exists. Pass `--url` with a concrete record URL meanwhile.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/salary-records/latest";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct RecordFetcher {
    client: reqwest::Client,
    url: String,
}

impl RecordFetcher {
    pub fn new(url: impl Into<String>) -> Result<Self, PredictError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the record; anything but 200 is an error
    pub async fn fetch(&self) -> Result<Value, PredictError> {
        tracing::debug!(url = %self.url, "Fetching salary record");
        let response = self.client.get(&self.url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(PredictError::UnexpectedStatus {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
