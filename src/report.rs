use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{DOWNLOAD_MIME, PREDICTION_COLUMN, PREVIEW_ROWS};
use crate::data::schema;
use crate::data::table::Table;

// ---------------------------------------------------------------------------
// File report – predictions attached to the uploaded table
// ---------------------------------------------------------------------------

/// The uploaded table augmented with a `Predicted_AQI` column.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub table: Table,
    pub predictions: Vec<f64>,
}

impl FileReport {
    /// Attach one prediction per row to `input`.
    pub fn new(input: &Table, predictions: Vec<f64>) -> Self {
        FileReport {
            table: input.with_column(PREDICTION_COLUMN, &predictions),
            predictions,
        }
    }

    /// First rows of the predicted column, as written to the export.
    pub fn prediction_preview(&self) -> Table {
        let cells = self.table.column(PREDICTION_COLUMN).unwrap_or_default();
        Table::new(
            vec![PREDICTION_COLUMN.to_string()],
            cells
                .into_iter()
                .take(PREVIEW_ROWS)
                .map(|cell| vec![cell.to_string()])
                .collect(),
        )
    }

    /// Line chart points: x = row position, y = predicted value.
    pub fn chart_points(&self) -> Vec<[f64; 2]> {
        self.predictions
            .iter()
            .enumerate()
            .map(|(i, &p)| [i as f64, p])
            .collect()
    }

    /// The augmented table as UTF-8 CSV with a header row.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(&self.table.headers)
            .context("writing CSV header")?;
        for (i, row) in self.table.rows.iter().enumerate() {
            writer
                .write_record(row)
                .with_context(|| format!("writing CSV row {i}"))?;
        }
        writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("flushing CSV: {}", e.error()))
    }

    /// Write the CSV export to `path`.
    pub fn export(&self, path: &Path) -> Result<()> {
        let bytes = self.to_csv_bytes()?;
        std::fs::write(path, bytes)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!(
            "Exported {} predictions to {} ({DOWNLOAD_MIME})",
            self.predictions.len(),
            path.display()
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// A predicted value with exactly two decimals, e.g. `41.23`.
pub fn format_prediction(value: f64) -> String {
    format!("{value:.2}")
}

pub fn manual_success_message(value: f64) -> String {
    format!("Predicted AQI: {}", format_prediction(value))
}

pub fn prediction_error_message(err: &impl std::fmt::Display) -> String {
    format!("Prediction Error: {err}")
}

/// Shown in file mode before anything is uploaded.
pub fn upload_hint() -> String {
    format!(
        "Upload a CSV file with these columns:\n{}",
        schema::feature_list()
    )
}
