//! Typed HTTP client for the stock prediction service.
//!
//! Wraps the two form-facing endpoints (sample-data lookup and prediction)
//! plus the service health probe. Every method performs exactly one outbound
//! request and surfaces failures as [`ClientError`], whose `Display` output
//! is the advisory text the UI shows verbatim.

use reqwest::Client;
use tracing::debug;

pub mod error;
pub mod protocol;

pub use error::ClientError;
pub use protocol::{FetchDataResponse, HealthStatus, PredictRequest, StockQuote};

const FETCH_DATA_FALLBACK: &str = "Failed to fetch stock data";
const PREDICT_FALLBACK: &str = "Failed to make prediction";
const HEALTH_FALLBACK: &str = "Failed to check service health";

pub struct PredictorClient {
    http: Client,
    base_url: String,
}

impl PredictorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Latest sample quote for `symbol` from the data-lookup endpoint.
    pub async fn fetch_sample_data(&self, symbol: &str) -> Result<StockQuote, ClientError> {
        debug!(symbol, "fetching sample stock data");
        let response = self
            .http
            .get(format!("{}/api/stock/fetch-data/{symbol}", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(service_error(response, FETCH_DATA_FALLBACK).await);
        }
        let body: FetchDataResponse = response.json().await?;
        Ok(body.data)
    }

    /// Submits the four features and returns the predicted close price.
    pub async fn predict(&self, request: &PredictRequest) -> Result<f64, ClientError> {
        debug!("requesting prediction");
        let response = self
            .http
            .post(format!("{}/api/stock/predict", self.base_url))
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(service_error(response, PREDICT_FALLBACK).await);
        }
        let body: protocol::PredictResponse = response.json().await?;
        Ok(body.prediction)
    }

    /// Reports whether the service is reachable and has a model loaded.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/stock/health", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(service_error(response, HEALTH_FALLBACK).await);
        }
        Ok(response.json().await?)
    }
}

/// Extracts the service-supplied error message from a non-success response,
/// falling back to `fallback` when the body is absent, unreadable, or empty.
async fn service_error(response: reqwest::Response, fallback: &str) -> ClientError {
    let message = response
        .json::<protocol::ErrorBody>()
        .await
        .ok()
        .map(|body| body.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_string());
    ClientError::Service { message }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
