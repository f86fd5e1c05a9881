/// Model layer: the pre-trained artifact and the inference seam.
///
/// ```text
///   model.json
///        │
///        ▼
///   ┌──────────────┐
///   │ ModelArtifact │  feature names + linear / forest / boosting estimator
///   └──────────────┘
///        │  impl Regressor
///        ▼
///   ┌───────────┐
///   │ Predictor  │  one batched call per request, Arc-shared
///   └───────────┘
/// ```

pub mod artifact;
#[cfg(test)]
pub mod sample;
pub mod tree;

pub use artifact::{Estimator, ModelArtifact};

use crate::data::table::FeatureMatrix;
use crate::error::PredictionError;

/// Anything that turns a feature matrix into one value per row.
///
/// Implementations are immutable after construction and may be called from
/// any thread.
pub trait Regressor: Send + Sync {
    /// Number of input columns the regressor was trained on.
    fn n_features(&self) -> usize;

    /// Predict every row of `x`; either all rows succeed or the call fails.
    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>, PredictionError>;
}
