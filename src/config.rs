// ---------------------------------------------------------------------------
// Fixed application configuration
// ---------------------------------------------------------------------------

/// Model artifact loaded once at startup, relative to the working directory.
pub const MODEL_PATH: &str = "model.json";

/// Number of rows shown in the data / prediction previews.
pub const PREVIEW_ROWS: usize = 5;

/// Name of the column appended to the uploaded table.
pub const PREDICTION_COLUMN: &str = "Predicted_AQI";

/// Default file name offered by the download dialog.
pub const DOWNLOAD_FILE_NAME: &str = "aqi_predictions.csv";

/// Content type of the exported file.
pub const DOWNLOAD_MIME: &str = "text/csv";

/// Slider bounds shared by every feature in manual mode.
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 1.0;
pub const SLIDER_STEP: f64 = 0.01;
pub const SLIDER_DEFAULT: f64 = 0.5;

pub const WINDOW_TITLE: &str = "Air Quality Index (AQI) Predictor";
pub const WINDOW_SIZE: [f32; 2] = [900.0, 800.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [520.0, 400.0];
