//! Form state and its derived render conditions.
//!
//! Everything the panels and buttons show is recomputed from these fields on
//! every frame; no derived value is stored.

use predictor_client::{PredictRequest, StockQuote};

use crate::controller::events::UiEvent;

/// One of the four OHLCV text inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Open,
    High,
    Low,
    Volume,
}

/// Raw text contents of the four value inputs. Free-form until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockInputs {
    pub open: String,
    pub high: String,
    pub low: String,
    pub volume: String,
}

impl StockInputs {
    fn from_quote(quote: &StockQuote) -> Self {
        Self {
            open: quote.open.to_string(),
            high: quote.high.to_string(),
            low: quote.low.to_string(),
            volume: quote.volume.to_string(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.open.is_empty()
            && !self.high.is_empty()
            && !self.low.is_empty()
            && !self.volume.is_empty()
    }
}

/// All state owned by the form view for the lifetime of the window.
pub struct FormState {
    pub symbol: String,
    pub inputs: StockInputs,
    pub prediction: Option<f64>,
    pub loading: bool,
    pub error: String,
    pub status: String,
}

impl FormState {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_uppercase(),
            inputs: StockInputs::default(),
            prediction: None,
            loading: false,
            error: String::new(),
            status: "Backend worker starting...".to_string(),
        }
    }

    /// Replaces the named input, leaving the other three untouched.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Open => self.inputs.open = value,
            Field::High => self.inputs.high = value,
            Field::Low => self.inputs.low = value,
            Field::Volume => self.inputs.volume = value,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Open => &self.inputs.open,
            Field::High => &self.inputs.high,
            Field::Low => &self.inputs.low,
            Field::Volume => &self.inputs.volume,
        }
    }

    /// Stores the upper-cased form of the input as the ticker symbol.
    pub fn set_symbol(&mut self, value: &str) {
        self.symbol = value.to_uppercase();
    }

    /// Marks a request as dispatched: loading on, previous error cleared.
    pub fn begin_request(&mut self) {
        self.loading = true;
        self.error.clear();
    }

    /// Applies one worker event. Settling events unconditionally clear the
    /// loading flag; with overlapping requests the last writer wins.
    pub fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => self.status = message,
            UiEvent::SampleDataLoaded { quote } => {
                self.inputs = StockInputs::from_quote(&quote);
                self.loading = false;
            }
            UiEvent::PredictionReady { value } => {
                self.prediction = Some(value);
                self.loading = false;
            }
            UiEvent::RequestFailed { message } => {
                self.error = message;
                self.loading = false;
            }
        }
    }

    /// Feature payload for the prediction endpoint. Unparsable inputs become
    /// the NaN sentinel and are transmitted as-is.
    pub fn predict_request(&self) -> PredictRequest {
        PredictRequest {
            open: parse_feature(&self.inputs.open),
            high: parse_feature(&self.inputs.high),
            low: parse_feature(&self.inputs.low),
            volume: parse_feature(&self.inputs.volume),
        }
    }

    pub fn can_predict(&self) -> bool {
        !self.loading && self.inputs.is_complete()
    }

    pub fn predict_button_label(&self) -> &'static str {
        if self.loading {
            "Processing..."
        } else {
            "Predict Next Price"
        }
    }

    pub fn show_error(&self) -> bool {
        !self.error.is_empty()
    }

    pub fn show_result(&self) -> bool {
        self.prediction.is_some()
    }

    pub fn show_placeholder(&self) -> bool {
        self.prediction.is_none() && self.error.is_empty()
    }
}

fn parse_feature(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}
