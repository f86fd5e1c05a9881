use std::path::Path;

use crate::config::{PREVIEW_ROWS, SLIDER_DEFAULT, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
use crate::data::loader;
use crate::data::schema::N_FEATURES;
use crate::data::table::Table;
use crate::error::{ParseError, PipelineError, ValidationError};
use crate::predict::Predictor;
use crate::report::{self, FileReport};

// ---------------------------------------------------------------------------
// Input mode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    UploadCsv,
    Sliders,
}

impl InputMode {
    pub fn label(self) -> &'static str {
        match self {
            InputMode::UploadCsv => "Upload CSV",
            InputMode::Sliders => "Use Sliders",
        }
    }
}

// ---------------------------------------------------------------------------
// File mode view
// ---------------------------------------------------------------------------

/// What file mode shows after the latest upload.
#[derive(Debug, Clone, Default)]
pub enum FileView {
    #[default]
    NoFile,
    ParseFailed {
        file_name: String,
        message: String,
    },
    ColumnsInvalid {
        file_name: String,
        preview: Table,
        missing: Vec<String>,
    },
    PredictionFailed {
        file_name: String,
        preview: Table,
        message: String,
    },
    Predicted {
        file_name: String,
        preview: Table,
        report: FileReport,
    },
}

impl FileView {
    /// Run the upload pipeline for a freshly parsed file.
    pub fn from_upload(
        predictor: &Predictor,
        file_name: String,
        parsed: Result<Table, ParseError>,
    ) -> FileView {
        let table = match parsed {
            Ok(table) => table,
            Err(e) => {
                log::error!("Failed to parse {file_name}: {e}");
                return FileView::ParseFailed {
                    file_name,
                    message: format!("Error: {e}"),
                };
            }
        };
        log::info!(
            "Loaded {file_name}: {} rows, columns {:?}",
            table.len(),
            table.headers
        );
        let preview = table.head(PREVIEW_ROWS);

        match predictor.predict_table(&table) {
            Ok(predictions) => {
                log::info!("Predicted AQI for {} rows", predictions.len());
                FileView::Predicted {
                    file_name,
                    preview,
                    report: FileReport::new(&table, predictions),
                }
            }
            Err(PipelineError::Validation(ValidationError::MissingColumns(missing))) => {
                log::warn!("{file_name} is missing columns {missing:?}");
                FileView::ColumnsInvalid {
                    file_name,
                    preview,
                    missing,
                }
            }
            Err(e) => {
                log::error!("Prediction failed for {file_name}: {e}");
                FileView::PredictionFailed {
                    file_name,
                    preview,
                    message: format!("Error: {e}"),
                }
            }
        }
    }

    pub fn report(&self) -> Option<&FileReport> {
        match self {
            FileView::Predicted { report, .. } => Some(report),
            _ => None,
        }
    }

    pub fn preview(&self) -> Option<&Table> {
        match self {
            FileView::ColumnsInvalid { preview, .. }
            | FileView::PredictionFailed { preview, .. }
            | FileView::Predicted { preview, .. } => Some(preview),
            _ => None,
        }
    }

    /// Inline error text, if the latest upload failed.
    pub fn error_message(&self) -> Option<String> {
        match self {
            FileView::ParseFailed { message, .. } | FileView::PredictionFailed { message, .. } => {
                Some(message.clone())
            }
            FileView::ColumnsInvalid { missing, .. } => {
                Some(ValidationError::MissingColumns(missing.clone()).to_string())
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Manual mode
// ---------------------------------------------------------------------------

/// Current slider values, one per feature in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualInput {
    values: [f64; N_FEATURES],
}

impl Default for ManualInput {
    fn default() -> Self {
        ManualInput {
            values: [SLIDER_DEFAULT; N_FEATURES],
        }
    }
}

impl ManualInput {
    pub fn values(&self) -> &[f64; N_FEATURES] {
        &self.values
    }

    /// Store a value clamped to the slider range and snapped to its step.
    pub fn set(&mut self, feature: usize, value: f64) {
        if let Some(slot) = self.values.get_mut(feature) {
            *slot = snap(value);
        }
    }
}

fn snap(value: f64) -> f64 {
    if !value.is_finite() {
        return SLIDER_DEFAULT;
    }
    let steps_per_unit = (1.0 / SLIDER_STEP).round();
    ((value * steps_per_unit).round() / steps_per_unit).clamp(SLIDER_MIN, SLIDER_MAX)
}

/// Result of the latest explicit Predict click.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ManualOutcome {
    #[default]
    Idle,
    Succeeded(f64),
    Failed(String),
}

impl ManualOutcome {
    pub fn message(&self) -> Option<String> {
        match self {
            ManualOutcome::Idle => None,
            ManualOutcome::Succeeded(v) => Some(report::manual_success_message(*v)),
            ManualOutcome::Failed(m) => Some(m.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Debug, Default)]
pub struct AppState {
    pub mode: InputMode,

    /// File mode: outcome of the latest upload.
    pub file_view: FileView,

    /// Manual mode: slider values and the latest prediction.
    pub manual: ManualInput,
    pub manual_outcome: ManualOutcome,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn on_mode_changed(&mut self, mode: InputMode) {
        if self.mode != mode {
            self.mode = mode;
            self.status_message = None;
        }
    }

    /// Read and process the file at `path`.
    pub fn on_file_uploaded(&mut self, predictor: &Predictor, path: &Path) {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.on_file_parsed(predictor, file_name, loader::load_csv(path));
    }

    /// Process an already parsed upload.
    pub fn on_file_parsed(
        &mut self,
        predictor: &Predictor,
        file_name: String,
        parsed: Result<Table, ParseError>,
    ) {
        self.file_view = FileView::from_upload(predictor, file_name, parsed);
        self.status_message = None;
    }

    /// A slider moved; any shown prediction no longer matches the inputs.
    pub fn on_slider_changed(&mut self, feature: usize, value: f64) {
        self.manual.set(feature, value);
        self.manual_outcome = ManualOutcome::Idle;
    }

    /// Explicit Predict action in manual mode.
    pub fn on_predict_clicked(&mut self, predictor: &Predictor) {
        self.manual_outcome = match predictor.predict_one(self.manual.values()) {
            Ok(value) => {
                log::info!("Manual prediction: {value}");
                ManualOutcome::Succeeded(value)
            }
            Err(e) => {
                log::error!("Manual prediction failed: {e}");
                ManualOutcome::Failed(report::prediction_error_message(&e))
            }
        };
    }

    /// Save the current report to `path`, reporting the outcome in the status line.
    pub fn on_download_requested(&mut self, path: &Path) {
        let Some(report) = self.file_view.report() else {
            return;
        };
        self.status_message = Some(match report.export(path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => {
                log::error!("Export failed: {e:#}");
                format!("Error: {e:#}")
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PREDICTION_COLUMN;
    use crate::data::loader::parse_csv;
    use crate::data::schema::FEATURES;
    use crate::predict::tests::sample_predictor;
    use std::collections::BTreeSet;

    fn upload(state: &mut AppState, csv: &str) {
        state.on_file_parsed(
            &sample_predictor(),
            "upload.csv".into(),
            parse_csv(csv.as_bytes()),
        );
    }

    #[test]
    fn starts_with_no_file_and_idle_sliders() {
        let state = AppState::default();
        assert_eq!(state.mode, InputMode::UploadCsv);
        assert!(matches!(state.file_view, FileView::NoFile));
        assert_eq!(state.manual.values(), &[0.5; N_FEATURES]);
        assert_eq!(state.manual_outcome, ManualOutcome::Idle);
    }

    #[test]
    fn valid_upload_predicts_every_row() {
        let mut state = AppState::default();
        let csv = format!(
            "{}\n{}\n{}\n",
            FEATURES.join(","),
            vec!["0.5"; 13].join(","),
            vec!["0"; 13].join(",")
        );
        upload(&mut state, &csv);

        let report = state.file_view.report().expect("predicted");
        assert_eq!(report.table.n_columns(), 14);
        assert_eq!(report.table.len(), 2);
        assert_eq!(report.chart_points().len(), 2);
        assert_eq!(report::format_prediction(report.predictions[0]), "41.23");
        assert_eq!(report.predictions[1], 20.0);
        assert!(state.file_view.error_message().is_none());
    }

    #[test]
    fn missing_so2_and_tmp_is_reported() {
        let mut state = AppState::default();
        let present: Vec<&str> = FEATURES
            .iter()
            .copied()
            .filter(|f| !matches!(*f, "SO2" | "TMP"))
            .collect();
        let csv = format!("{}\n{}\n", present.join(","), vec!["1"; 11].join(","));
        upload(&mut state, &csv);

        match &state.file_view {
            FileView::ColumnsInvalid {
                missing, preview, ..
            } => {
                let missing: BTreeSet<&str> = missing.iter().map(String::as_str).collect();
                assert_eq!(missing, BTreeSet::from(["SO2", "TMP"]));
                assert!(preview.column_index(PREDICTION_COLUMN).is_none());
            }
            other => panic!("unexpected view {other:?}"),
        }
        assert!(state.file_view.report().is_none());
        assert_eq!(
            state.file_view.error_message().unwrap(),
            "Missing columns in CSV: SO2, TMP"
        );
    }

    #[test]
    fn unparseable_upload_keeps_session() {
        let mut state = AppState::default();
        upload(&mut state, "a,b\n1,2,3\n");
        assert!(matches!(state.file_view, FileView::ParseFailed { .. }));
        assert!(state.file_view.error_message().unwrap().starts_with("Error: "));

        let csv = format!("{}\n{}\n", FEATURES.join(","), vec!["1"; 13].join(","));
        upload(&mut state, &csv);
        assert!(state.file_view.report().is_some());
    }

    #[test]
    fn short_row_in_extra_column_still_predicts() {
        let mut state = AppState::default();
        let values = vec!["0.5"; 13].join(",");
        let csv = format!("{},note\n{values},first\n{values}\n", FEATURES.join(","));
        upload(&mut state, &csv);

        let report = state.file_view.report().expect("predicted");
        assert_eq!(report.predictions.len(), 2);
        assert_eq!(report.table.column("note").unwrap(), vec!["first", ""]);
    }

    #[test]
    fn short_row_in_feature_column_is_prediction_failure() {
        let mut state = AppState::default();
        let csv = format!(
            "{}\n{}\n",
            FEATURES.join(","),
            vec!["0.5"; 12].join(",")
        );
        upload(&mut state, &csv);
        match &state.file_view {
            FileView::PredictionFailed { message, .. } => {
                assert!(message.contains("column 'traffic'"), "{message}");
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn bad_cell_becomes_prediction_failure() {
        let mut state = AppState::default();
        let mut cells = vec!["1"; 13];
        cells[0] = "";
        let csv = format!("{}\n{}\n", FEATURES.join(","), cells.join(","));
        upload(&mut state, &csv);
        match &state.file_view {
            FileView::PredictionFailed { message, preview, .. } => {
                assert!(message.contains("column 'CO'"));
                assert_eq!(preview.len(), 1);
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn upload_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(
            &path,
            format!("{}\n{}\n", FEATURES.join(","), vec!["0.5"; 13].join(",")),
        )
        .unwrap();
        let mut state = AppState::default();
        state.on_file_uploaded(&sample_predictor(), &path);
        match &state.file_view {
            FileView::Predicted { file_name, .. } => assert_eq!(file_name, "data.csv"),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn predict_click_with_defaults() {
        let mut state = AppState::default();
        state.on_mode_changed(InputMode::Sliders);
        state.on_predict_clicked(&sample_predictor());
        assert_eq!(
            state.manual_outcome.message().unwrap(),
            "Predicted AQI: 41.23"
        );
    }

    #[test]
    fn slider_change_clears_previous_result() {
        let mut state = AppState::default();
        let predictor = sample_predictor();
        state.on_predict_clicked(&predictor);
        assert!(matches!(state.manual_outcome, ManualOutcome::Succeeded(_)));

        state.on_slider_changed(0, 0.9);
        assert_eq!(state.manual_outcome, ManualOutcome::Idle);
        state.on_predict_clicked(&predictor);
        assert!(matches!(state.manual_outcome, ManualOutcome::Succeeded(v) if v > 41.23));
    }

    #[test]
    fn slider_values_are_clamped_and_snapped() {
        let mut input = ManualInput::default();
        input.set(0, 1.7);
        input.set(1, -0.2);
        input.set(2, 0.123);
        input.set(3, f64::NAN);
        input.set(99, 0.1);
        assert_eq!(&input.values()[..4], &[1.0, 0.0, 0.12, 0.5]);
    }

    #[test]
    fn any_slider_combination_formats_two_decimals() {
        let predictor = sample_predictor();
        for step in 0..=10 {
            let mut state = AppState::default();
            for feature in 0..N_FEATURES {
                let v = ((feature + step) % 11) as f64 / 10.0;
                state.on_slider_changed(feature, v);
            }
            state.on_predict_clicked(&predictor);
            let ManualOutcome::Succeeded(v) = state.manual_outcome else {
                panic!("prediction failed");
            };
            let text = report::format_prediction(v);
            let (_, decimals) = text.split_once('.').unwrap();
            assert_eq!(decimals.len(), 2);
        }
    }

    #[test]
    fn download_writes_augmented_csv() {
        let mut state = AppState::default();
        let csv = format!("{}\n{}\n", FEATURES.join(","), vec!["0.5"; 13].join(","));
        upload(&mut state, &csv);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aqi_predictions.csv");
        state.on_download_requested(&path);
        assert!(state.status_message.as_deref().unwrap().starts_with("Saved"));

        let exported = loader::load_csv(&path).unwrap();
        assert_eq!(exported.column(PREDICTION_COLUMN).unwrap().len(), 1);
    }
}
