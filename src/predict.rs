use std::sync::Arc;

use crate::data::schema::{self, N_FEATURES};
use crate::data::table::{FeatureMatrix, Table};
use crate::data::validate::{check_columns, feature_matrix};
use crate::error::{PipelineError, PredictionError};
use crate::model::Regressor;

// ---------------------------------------------------------------------------
// Predictor – batched access to the shared model
// ---------------------------------------------------------------------------

/// Calls the loaded model; cheap to clone, every clone shares one model.
///
/// Nothing is cached: every call runs the model again.
#[derive(Clone)]
pub struct Predictor {
    model: Arc<dyn Regressor>,
}

impl Predictor {
    pub fn new(model: Arc<dyn Regressor>) -> Self {
        Predictor { model }
    }

    /// One model call for the whole matrix, one value per row in row order.
    pub fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>, PredictionError> {
        let predictions = self.model.predict(x)?;
        if predictions.len() != x.n_rows() {
            return Err(PredictionError::OutputLength {
                expected: x.n_rows(),
                found: predictions.len(),
            });
        }
        log::debug!("Predicted {} rows over {:?}", predictions.len(), x.columns());
        Ok(predictions)
    }

    /// Validate an uploaded table, select its features and predict.
    pub fn predict_table(&self, table: &Table) -> Result<Vec<f64>, PipelineError> {
        let indices = check_columns(table)?;
        let x = feature_matrix(table, &indices)?;
        Ok(self.predict(&x)?)
    }

    /// Predict a single row of slider values given in schema order.
    pub fn predict_one(&self, values: &[f64; N_FEATURES]) -> Result<f64, PredictionError> {
        let x = FeatureMatrix::from_rows(schema::feature_names(), vec![values.to_vec()]);
        let predictions = self.predict(&x)?;
        predictions
            .first()
            .copied()
            .ok_or(PredictionError::OutputLength {
                expected: 1,
                found: 0,
            })
    }
}
