//! Desktop GUI for the stock prediction service.

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::PredictorApp;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the prediction service.
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    server_url: String,
    /// Ticker symbol preloaded into the form.
    #[arg(long, default_value = "IBM")]
    symbol: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let server_url = resolve_server_url(args.server_url);
    let symbol = args.symbol;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(server_url, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Stock Market Predictor")
            .with_inner_size([900.0, 560.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Stock Market Predictor",
        options,
        Box::new(move |_cc| Ok(Box::new(PredictorApp::new(cmd_tx, ui_rx, &symbol)))),
    )
}

/// A non-empty environment override wins over the CLI flag.
fn resolve_server_url(cli_value: String) -> String {
    match std::env::var("STOCK_PREDICTOR_SERVER_URL") {
        Ok(value) if !value.trim().is_empty() => value,
        _ => cli_value,
    }
}
