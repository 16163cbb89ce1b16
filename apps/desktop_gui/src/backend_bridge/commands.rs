//! Backend commands queued from UI to the backend worker.

use predictor_client::PredictRequest;

pub enum BackendCommand {
    FetchSampleData { symbol: String },
    Predict { request: PredictRequest },
}
