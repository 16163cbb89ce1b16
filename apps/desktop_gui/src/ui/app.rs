//! The eframe application: drains worker events into the form state, then
//! renders the input and results cards from the derived render conditions.

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::state::{Field, FormState};

pub struct PredictorApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    form: FormState,
}

impl PredictorApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>, symbol: &str) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            form: FormState::new(symbol),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.form.apply_event(event);
        }
    }

    fn fetch_sample_data(&mut self) {
        self.form.begin_request();
        let symbol = self.form.symbol.clone();
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::FetchSampleData { symbol },
            &mut self.form,
        );
    }

    fn predict(&mut self) {
        self.form.begin_request();
        let request = self.form.predict_request();
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Predict { request },
            &mut self.form,
        );
    }

    fn card_frame(ui: &egui::Ui) -> egui::Frame {
        egui::Frame::NONE
            .fill(ui.visuals().faint_bg_color)
            .corner_radius(12.0)
            .stroke(egui::Stroke::new(
                1.0,
                ui.visuals().widgets.noninteractive.bg_stroke.color,
            ))
            .inner_margin(egui::Margin::symmetric(16, 14))
    }

    fn value_field(
        &mut self,
        ui: &mut egui::Ui,
        id: &'static str,
        label: &str,
        hint: &str,
        field: Field,
    ) {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(label).strong());
            let mut buf = self.form.field(field).to_string();
            let edit = egui::TextEdit::singleline(&mut buf)
                .id_salt(id)
                .hint_text(
                    egui::RichText::new(hint)
                        .color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
                )
                .desired_width(140.0);
            if ui.add(edit).changed() {
                self.form.set_field(field, buf);
            }
        });
    }

    fn show_input_card(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        Self::card_frame(ui).show(ui, |ui| {
            ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);
            ui.label(egui::RichText::new("Stock Data Input").strong().size(16.0));
            ui.weak("Enter stock data or fetch a recent sample for prediction.");
            ui.add_space(2.0);

            ui.horizontal(|ui| {
                let mut symbol_buf = self.form.symbol.clone();
                let edit = egui::TextEdit::singleline(&mut symbol_buf)
                    .id_salt("symbol")
                    .hint_text(
                        egui::RichText::new("Stock Symbol (e.g., IBM)")
                            .color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
                    )
                    .desired_width((ui.available_width() - 110.0).max(80.0));
                let response = ui.add(edit);
                if response.changed() {
                    self.form.set_symbol(&symbol_buf);
                }

                // Enter in the symbol field fetches, same as the button.
                let enter_pressed = ctx.input(|i| i.key_pressed(egui::Key::Enter));
                if response.lost_focus() && enter_pressed && !self.form.loading {
                    self.fetch_sample_data();
                }

                let fetch_btn = egui::Button::new("Fetch Data");
                if ui.add_enabled(!self.form.loading, fetch_btn).clicked() {
                    self.fetch_sample_data();
                }
            });

            egui::Grid::new("stock_inputs")
                .num_columns(2)
                .spacing(egui::vec2(14.0, 8.0))
                .show(ui, |ui| {
                    self.value_field(ui, "input_open", "Open Price", "0.00", Field::Open);
                    self.value_field(ui, "input_high", "High Price", "0.00", Field::High);
                    ui.end_row();
                    self.value_field(ui, "input_low", "Low Price", "0.00", Field::Low);
                    self.value_field(ui, "input_volume", "Volume", "0", Field::Volume);
                    ui.end_row();
                });

            let predict_btn =
                egui::Button::new(egui::RichText::new(self.form.predict_button_label()).strong())
                    .min_size(egui::vec2(ui.available_width(), 36.0));
            if ui
                .add_enabled(self.form.can_predict(), predict_btn)
                .clicked()
            {
                self.predict();
            }
        });
    }

    fn show_results_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame(ui).show(ui, |ui| {
            ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);
            ui.label(
                egui::RichText::new("Prediction Results")
                    .strong()
                    .size(16.0),
            );
            ui.weak("Model prediction based on your input.");
            ui.add_space(2.0);

            if self.form.show_error() {
                egui::Frame::NONE
                    .fill(egui::Color32::from_rgb(72, 24, 24))
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&self.form.error)
                                .color(egui::Color32::from_rgb(255, 170, 170)),
                        );
                    });
            }

            if let Some(prediction) = self.form.prediction {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.label(egui::RichText::new("Predicted Price").strong().size(18.0));
                    ui.label(
                        egui::RichText::new(format!("${prediction}"))
                            .size(34.0)
                            .strong()
                            .color(egui::Color32::from_rgb(87, 189, 130)),
                    );
                    ui.small(egui::RichText::new("Based on Linear Regression Model").weak());
                    ui.add_space(10.0);
                });
            }

            if self.form.show_placeholder() {
                ui.vertical_centered(|ui| {
                    ui.add_space(28.0);
                    ui.weak("Enter stock data and click \"Predict Next Price\" to see results");
                    ui.add_space(28.0);
                });
            }
        });
    }

    fn show_footer(&self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            ui.small(egui::RichText::new("Model: Linear Regression").weak());
            ui.separator();
            ui.small(egui::RichText::new("Accuracy: R² = 0.98").weak());
            ui.separator();
            ui.small(egui::RichText::new("Features: OHLCV data").weak());
        });
        ui.add_space(2.0);
        ui.horizontal_wrapped(|ui| {
            ui.small("Status:");
            ui.small(egui::RichText::new(&self.form.status).weak());
        });
    }
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.heading("Stock Market Predictor");
                ui.weak("Predict stock prices using machine learning");
            });
            ui.add_space(12.0);

            ui.columns(2, |columns| {
                self.show_input_card(&mut columns[0], ctx);
                self.show_results_card(&mut columns[1]);
            });

            ui.add_space(12.0);
            self.show_footer(ui);
        });

        // Worker events arrive over a channel; poll them on a steady cadence.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
