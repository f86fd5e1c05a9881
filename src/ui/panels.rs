use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::config::{DOWNLOAD_FILE_NAME, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP, WINDOW_TITLE};
use crate::data::schema::FEATURES;
use crate::data::table::Table;
use crate::predict::Predictor;
use crate::report;
use crate::state::{AppState, FileView, InputMode, ManualOutcome};

use super::plot;

const ERROR_COLOR: Color32 = Color32::from_rgb(220, 70, 70);
const SUCCESS_COLOR: Color32 = Color32::from_rgb(60, 170, 90);

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Title, input mode selector and status line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading(WINDOW_TITLE);
    ui.label("Predict AQI using environmental and traffic data.");
    ui.add_space(4.0);

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Choose Input Method:");
        let mut mode = state.mode;
        for option in [InputMode::UploadCsv, InputMode::Sliders] {
            ui.radio_value(&mut mode, option, option.label());
        }
        state.on_mode_changed(mode);
    });

    if let Some(msg) = &state.status_message {
        let color = if msg.starts_with("Error") {
            ERROR_COLOR
        } else {
            SUCCESS_COLOR
        };
        ui.label(RichText::new(msg).color(color));
    }
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// CSV upload mode
// ---------------------------------------------------------------------------

pub fn file_panel(ui: &mut Ui, state: &mut AppState, predictor: &Predictor) {
    if ui.button("Upload a CSV file…").clicked() {
        open_file_dialog(state, predictor);
    }
    ui.add_space(8.0);

    if matches!(state.file_view, FileView::NoFile) {
        ui.label(report::upload_hint());
        return;
    }

    if let Some(preview) = state.file_view.preview() {
        ui.strong("Uploaded Data");
        data_table(ui, "data_preview", preview);
        ui.add_space(8.0);
    }

    if let Some(msg) = state.file_view.error_message() {
        ui.label(RichText::new(msg).color(ERROR_COLOR));
        return;
    }

    let Some(report) = state.file_view.report() else {
        return;
    };

    ui.strong("Predicted AQI Values");
    let predicted = report.prediction_preview();
    data_table(ui, "prediction_preview", &predicted);
    ui.add_space(8.0);

    plot::prediction_chart(ui, report);
    ui.add_space(8.0);

    if ui.button("Download Results").clicked() {
        save_file_dialog(state);
    }
}

/// Render a small read-only table.
fn data_table(ui: &mut Ui, id: &str, table: &Table) {
    ui.push_id(id, |ui: &mut Ui| {
        egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .columns(Column::auto().at_least(40.0), table.n_columns())
                .header(20.0, |mut header| {
                    for name in &table.headers {
                        header.col(|ui: &mut Ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|mut body| {
                    for row in &table.rows {
                        body.row(18.0, |mut cells| {
                            for cell in row {
                                cells.col(|ui: &mut Ui| {
                                    ui.label(cell);
                                });
                            }
                        });
                    }
                });
        });
    });
}

// ---------------------------------------------------------------------------
// Slider mode
// ---------------------------------------------------------------------------

pub fn slider_panel(ui: &mut Ui, state: &mut AppState, predictor: &Predictor) {
    ui.strong("Enter Feature Values");
    ui.add_space(4.0);

    egui::Grid::new("feature_sliders")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            for (i, name) in FEATURES.iter().enumerate() {
                ui.label(*name);
                let mut value = state.manual.values()[i];
                let slider = egui::Slider::new(&mut value, SLIDER_MIN..=SLIDER_MAX)
                    .step_by(SLIDER_STEP)
                    .fixed_decimals(2);
                if ui.add(slider).changed() {
                    state.on_slider_changed(i, value);
                }
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    if ui.button("Predict AQI").clicked() {
        state.on_predict_clicked(predictor);
    }

    if let Some(msg) = state.manual_outcome.message() {
        let color = match state.manual_outcome {
            ManualOutcome::Succeeded(_) => SUCCESS_COLOR,
            _ => ERROR_COLOR,
        };
        ui.add_space(6.0);
        ui.label(RichText::new(msg).color(color).strong());
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState, predictor: &Predictor) {
    let file = rfd::FileDialog::new()
        .set_title("Upload a CSV file")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.on_file_uploaded(predictor, &path);
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Download Results")
        .set_file_name(DOWNLOAD_FILE_NAME)
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        state.on_download_requested(&path);
    }
}
