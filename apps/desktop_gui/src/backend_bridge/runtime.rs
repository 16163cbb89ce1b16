//! Worker thread bridging the UI command queue and the prediction service.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use predictor_client::PredictorClient;
use tracing::{error, info};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the backend worker: a dedicated thread owning a tokio runtime that
/// runs one task per queued command. Requests run without mutual exclusion;
/// overlapping calls settle in arrival order and the last writer wins for
/// the loading flag and the error message.
pub fn launch(base_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::RequestFailed {
                    message: format!("Backend worker startup failure: {err}"),
                });
                error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = Arc::new(PredictorClient::new(base_url));

            {
                let client = client.clone();
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    probe_health(&client, &ui_tx).await;
                });
            }

            while let Ok(cmd) = cmd_rx.recv() {
                let client = client.clone();
                let ui_tx = ui_tx.clone();
                match cmd {
                    BackendCommand::FetchSampleData { symbol } => {
                        tokio::spawn(async move {
                            let event = match client.fetch_sample_data(&symbol).await {
                                Ok(quote) => UiEvent::SampleDataLoaded { quote },
                                Err(err) => UiEvent::RequestFailed {
                                    message: err.to_string(),
                                },
                            };
                            let _ = ui_tx.try_send(event);
                        });
                    }
                    BackendCommand::Predict { request } => {
                        tokio::spawn(async move {
                            let event = match client.predict(&request).await {
                                Ok(value) => UiEvent::PredictionReady { value },
                                Err(err) => UiEvent::RequestFailed {
                                    message: err.to_string(),
                                },
                            };
                            let _ = ui_tx.try_send(event);
                        });
                    }
                }
            }
        });
    });
}

/// One-shot startup probe of the service health endpoint. Feeds the status
/// line only; never gates a button and never touches the error panel.
async fn probe_health(client: &PredictorClient, ui_tx: &Sender<UiEvent>) {
    let message = match client.health().await {
        Ok(health) if health.model_loaded => {
            format!("Prediction service {} (model loaded)", health.status)
        }
        Ok(health) => format!("Prediction service {} (no model loaded)", health.status),
        Err(err) => format!("Prediction service unavailable: {err}"),
    };
    info!("{message}");
    let _ = ui_tx.try_send(UiEvent::Info(message));
}
