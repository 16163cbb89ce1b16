//! Worker-to-UI events for the prediction form.

use predictor_client::StockQuote;

/// Events sent from the backend worker to the UI thread.
///
/// `SampleDataLoaded`, `PredictionReady`, and `RequestFailed` each settle one
/// in-flight request and clear the loading flag; `Info` only updates the
/// advisory status line.
pub enum UiEvent {
    Info(String),
    SampleDataLoaded { quote: StockQuote },
    PredictionReady { value: f64 },
    RequestFailed { message: String },
}
