use serde::{Deserialize, Serialize};

/// Latest per-period quote returned by the data-lookup endpoint.
///
/// `close` is reported by the service but never fed back into the form; the
/// close price is what the model predicts. Services that omit it (or the
/// envelope's `symbol`/`timestamp`) still deserialize cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    #[serde(default)]
    pub close: Option<f64>,
    pub volume: f64,
}

/// Success envelope of `GET /api/stock/fetch-data/{symbol}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchDataResponse {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub timestamp: String,
    pub data: StockQuote,
}

/// Feature payload of `POST /api/stock/predict`.
///
/// Fields are plain `f64`; non-finite values (the sentinel for unparsable
/// form input) serialize as JSON `null` and are transmitted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
}

/// Success envelope of `POST /api/stock/predict`. The service echoes the
/// submitted features back; callers only consume `prediction`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    pub prediction: f64,
    #[serde(default)]
    pub features: Option<PredictRequest>,
}

/// Body of `GET /api/stock/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
}

/// Structured error body the service sends with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
