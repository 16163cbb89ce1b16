use super::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

async fn spawn_server(app: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

#[derive(Clone)]
struct CaptureState {
    tx: Arc<Mutex<Option<oneshot::Sender<Value>>>>,
}

async fn handle_predict(
    State(state): State<CaptureState>,
    Json(payload): Json<Value>,
) -> Json<Value> {
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send(payload);
    }
    Json(json!({
        "prediction": 105.3,
        "features": { "open": 100.0, "high": 110.0, "low": 95.0, "volume": 5000.0 }
    }))
}

async fn spawn_predict_server() -> (String, oneshot::Receiver<Value>) {
    let (tx, rx) = oneshot::channel();
    let state = CaptureState {
        tx: Arc::new(Mutex::new(Some(tx))),
    };
    let app = Router::new()
        .route("/api/stock/predict", post(handle_predict))
        .with_state(state);
    (spawn_server(app).await, rx)
}

async fn handle_fetch(
    State(state): State<CaptureState>,
    Path(symbol): Path<String>,
) -> Json<Value> {
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send(Value::String(symbol.clone()));
    }
    Json(json!({
        "symbol": symbol,
        "timestamp": "2025-08-04 19:55:00",
        "data": { "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.75, "volume": 1000.0 }
    }))
}

async fn spawn_fetch_server() -> (String, oneshot::Receiver<Value>) {
    let (tx, rx) = oneshot::channel();
    let state = CaptureState {
        tx: Arc::new(Mutex::new(Some(tx))),
    };
    let app = Router::new()
        .route("/api/stock/fetch-data/:symbol", get(handle_fetch))
        .with_state(state);
    (spawn_server(app).await, rx)
}

#[tokio::test]
async fn fetch_sample_data_requests_the_symbol_and_parses_the_quote() {
    let (server_url, symbol_rx) = spawn_fetch_server().await;
    let client = PredictorClient::new(server_url);

    let quote = client.fetch_sample_data("IBM").await.expect("fetch");

    assert_eq!(symbol_rx.await.expect("requested symbol"), json!("IBM"));
    assert_eq!(quote.open, 1.0);
    assert_eq!(quote.high, 2.0);
    assert_eq!(quote.low, 0.5);
    assert_eq!(quote.close, Some(1.75));
    assert_eq!(quote.volume, 1000.0);
}

#[tokio::test]
async fn fetch_sample_data_accepts_a_minimal_envelope() {
    let app = Router::new().route(
        "/api/stock/fetch-data/:symbol",
        get(|| async {
            Json(json!({
                "data": { "open": 1.0, "high": 2.0, "low": 0.5, "volume": 1000.0 }
            }))
        }),
    );
    let client = PredictorClient::new(spawn_server(app).await);

    let quote = client.fetch_sample_data("IBM").await.expect("fetch");

    assert_eq!(quote.close, None);
    assert_eq!(quote.volume, 1000.0);
}

#[tokio::test]
async fn fetch_sample_data_surfaces_the_service_error_message() {
    let app = Router::new().route(
        "/api/stock/fetch-data/:symbol",
        get(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "error": "bad symbol" }))) }),
    );
    let client = PredictorClient::new(spawn_server(app).await);

    let err = client.fetch_sample_data("ZZZZ").await.expect_err("must fail");

    assert!(matches!(&err, ClientError::Service { message } if message == "bad symbol"));
    assert_eq!(err.to_string(), "bad symbol");
}

#[tokio::test]
async fn fetch_sample_data_falls_back_when_the_error_body_is_unreadable() {
    let app = Router::new().route(
        "/api/stock/fetch-data/:symbol",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let client = PredictorClient::new(spawn_server(app).await);

    let err = client.fetch_sample_data("IBM").await.expect_err("must fail");

    assert_eq!(err.to_string(), "Failed to fetch stock data");
}

#[tokio::test]
async fn fetch_sample_data_falls_back_when_the_error_message_is_empty() {
    let app = Router::new().route(
        "/api/stock/fetch-data/:symbol",
        get(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "error": "" }))) }),
    );
    let client = PredictorClient::new(spawn_server(app).await);

    let err = client.fetch_sample_data("IBM").await.expect_err("must fail");

    assert_eq!(err.to_string(), "Failed to fetch stock data");
}

#[tokio::test]
async fn predict_posts_the_features_and_returns_the_prediction() {
    let (server_url, payload_rx) = spawn_predict_server().await;
    let client = PredictorClient::new(server_url);

    let prediction = client
        .predict(&PredictRequest {
            open: 100.0,
            high: 110.0,
            low: 95.0,
            volume: 5000.0,
        })
        .await
        .expect("predict");

    assert_eq!(prediction, 105.3);
    assert_eq!(
        payload_rx.await.expect("payload"),
        json!({ "open": 100.0, "high": 110.0, "low": 95.0, "volume": 5000.0 })
    );
}

#[tokio::test]
async fn predict_transmits_null_for_non_finite_features() {
    let (server_url, payload_rx) = spawn_predict_server().await;
    let client = PredictorClient::new(server_url);

    client
        .predict(&PredictRequest {
            open: 100.0,
            high: 110.0,
            low: 95.0,
            volume: f64::NAN,
        })
        .await
        .expect("predict");

    let payload = payload_rx.await.expect("payload");
    assert_eq!(payload["open"], json!(100.0));
    assert!(payload["volume"].is_null());
}

#[tokio::test]
async fn predict_falls_back_when_the_error_body_is_missing() {
    let app = Router::new().route(
        "/api/stock/predict",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let client = PredictorClient::new(spawn_server(app).await);

    let err = client
        .predict(&PredictRequest {
            open: 1.0,
            high: 2.0,
            low: 0.5,
            volume: 1000.0,
        })
        .await
        .expect_err("must fail");

    assert_eq!(err.to_string(), "Failed to make prediction");
}

#[tokio::test]
async fn transport_failure_is_reported_as_a_network_error() {
    // Bind and immediately drop a listener so the port refuses connections.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let client = PredictorClient::new(format!("http://{addr}"));

    let err = client
        .predict(&PredictRequest {
            open: 100.0,
            high: 110.0,
            low: 95.0,
            volume: 5000.0,
        })
        .await
        .expect_err("must fail");

    assert!(matches!(err, ClientError::Network { .. }));
    assert!(err.to_string().starts_with("Network error:"));
}

#[tokio::test]
async fn undecodable_success_body_is_a_network_error() {
    let app = Router::new().route(
        "/api/stock/fetch-data/:symbol",
        get(|| async { "not json" }),
    );
    let client = PredictorClient::new(spawn_server(app).await);

    let err = client.fetch_sample_data("IBM").await.expect_err("must fail");

    assert!(matches!(err, ClientError::Network { .. }));
    assert!(err.to_string().starts_with("Network error:"));
}

#[tokio::test]
async fn trailing_slashes_on_the_base_url_are_normalized() {
    let (server_url, _symbol_rx) = spawn_fetch_server().await;
    let client = PredictorClient::new(format!("{server_url}/"));

    let quote = client.fetch_sample_data("IBM").await.expect("fetch");

    assert_eq!(quote.open, 1.0);
}

#[tokio::test]
async fn health_reports_model_state() {
    let app = Router::new().route(
        "/api/stock/health",
        get(|| async { Json(json!({ "status": "healthy", "model_loaded": true })) }),
    );
    let client = PredictorClient::new(spawn_server(app).await);

    let health = client.health().await.expect("health");

    assert_eq!(health.status, "healthy");
    assert!(health.model_loaded);
}
