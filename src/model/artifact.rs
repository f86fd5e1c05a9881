use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::schema;
use crate::data::table::FeatureMatrix;
use crate::error::{ArtifactError, PredictionError};

use super::tree::TreeNode;
use super::Regressor;

// ---------------------------------------------------------------------------
// Estimator – the fitted model parameters
// ---------------------------------------------------------------------------

/// Fitted estimator, tagged by `"kind"` in the artifact JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimator {
    /// `intercept + Σ coefficients[i] * x[i]`
    Linear {
        intercept: f64,
        coefficients: Vec<f64>,
    },
    /// Mean of the tree outputs.
    RandomForest { trees: Vec<TreeNode> },
    /// `base_score + learning_rate * Σ tree outputs`
    GradientBoosting {
        base_score: f64,
        learning_rate: f64,
        trees: Vec<TreeNode>,
    },
}

impl Estimator {
    fn predict_row(&self, row: &[f64]) -> f64 {
        match self {
            Estimator::Linear {
                intercept,
                coefficients,
            } => intercept + coefficients.iter().zip(row).map(|(c, x)| c * x).sum::<f64>(),
            Estimator::RandomForest { trees } => {
                trees.iter().map(|t| t.evaluate(row)).sum::<f64>() / trees.len() as f64
            }
            Estimator::GradientBoosting {
                base_score,
                learning_rate,
                trees,
            } => base_score + learning_rate * trees.iter().map(|t| t.evaluate(row)).sum::<f64>(),
        }
    }

    fn validate(&self, n_features: usize) -> Result<(), ArtifactError> {
        match self {
            Estimator::Linear {
                intercept,
                coefficients,
            } => {
                if coefficients.len() != n_features {
                    return Err(ArtifactError::CoefficientCount {
                        expected: n_features,
                        found: coefficients.len(),
                    });
                }
                if !intercept.is_finite() {
                    return Err(ArtifactError::NonFinite("intercept"));
                }
                if coefficients.iter().any(|c| !c.is_finite()) {
                    return Err(ArtifactError::NonFinite("coefficients"));
                }
                Ok(())
            }
            Estimator::RandomForest { trees } => validate_trees(trees, n_features),
            Estimator::GradientBoosting {
                base_score,
                learning_rate,
                trees,
            } => {
                if !base_score.is_finite() {
                    return Err(ArtifactError::NonFinite("base_score"));
                }
                if !learning_rate.is_finite() {
                    return Err(ArtifactError::NonFinite("learning_rate"));
                }
                validate_trees(trees, n_features)
            }
        }
    }

    /// Short description for the startup log.
    fn describe(&self) -> String {
        let ensemble = |kind: &str, trees: &[TreeNode]| {
            let depth = trees.iter().map(TreeNode::depth).max().unwrap_or(0);
            format!("{kind} ({} trees, max depth {depth})", trees.len())
        };
        match self {
            Estimator::Linear { .. } => "linear".to_string(),
            Estimator::RandomForest { trees } => ensemble("random_forest", trees),
            Estimator::GradientBoosting { trees, .. } => ensemble("gradient_boosting", trees),
        }
    }
}

fn validate_trees(trees: &[TreeNode], n_features: usize) -> Result<(), ArtifactError> {
    if trees.is_empty() {
        return Err(ArtifactError::EmptyEnsemble);
    }
    trees.iter().try_for_each(|t| t.validate(n_features))
}

// ---------------------------------------------------------------------------
// ModelArtifact – what lives in model.json
// ---------------------------------------------------------------------------

/// The pre-trained model loaded once at startup.
///
/// ```json
/// {
///   "feature_names": ["CO", "NO", …, "traffic"],
///   "kind": "linear",
///   "intercept": 20.0,
///   "coefficients": [3.1, …]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Columns the model was trained on, in training order.
    pub feature_names: Vec<String>,
    #[serde(flatten)]
    pub estimator: Estimator,
}

impl ModelArtifact {
    /// Read, parse and validate an artifact file.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let text = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact = Self::from_json(&text)?;
        log::info!(
            "Loaded {} model from {} ({} features)",
            artifact.estimator.describe(),
            path.display(),
            artifact.feature_names.len()
        );
        Ok(artifact)
    }

    /// Parse and validate an artifact from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ArtifactError> {
        let artifact: ModelArtifact = serde_json::from_str(text)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// The artifact must be trained on exactly the feature schema.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        let expected = schema::feature_names();
        if self.feature_names != expected {
            return Err(ArtifactError::FeatureNames {
                expected,
                found: self.feature_names.clone(),
            });
        }
        self.estimator.validate(self.feature_names.len())
    }
}

impl Regressor for ModelArtifact {
    fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>, PredictionError> {
        if x.n_cols() != self.n_features() {
            return Err(PredictionError::ShapeMismatch {
                expected: self.n_features(),
                found: x.n_cols(),
            });
        }

        let predictions: Vec<f64> = x.rows().map(|row| self.estimator.predict_row(row)).collect();

        if let Some(row) = predictions.iter().position(|p| !p.is_finite()) {
            return Err(PredictionError::NonFiniteOutput { row: row + 1 });
        }
        Ok(predictions)
    }
}
