//! Command orchestration helpers from UI actions to the backend queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::state::FormState;

/// Queues a command for the backend worker. When the queue cannot accept it
/// the request never started, so the failure is surfaced on the form and the
/// loading flag is released.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    form: &mut FormState,
) {
    let cmd_name = match &cmd {
        BackendCommand::FetchSampleData { .. } => "fetch_sample_data",
        BackendCommand::Predict { .. } => "predict",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            form.error = "Request queue is full; please retry".to_string();
            form.loading = false;
        }
        Err(TrySendError::Disconnected(_)) => {
            form.error =
                "Backend worker disconnected (possible startup/runtime failure); restart the app"
                    .to_string();
            form.loading = false;
        }
    }
}
