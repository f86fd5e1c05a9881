use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Upload parsing
// ---------------------------------------------------------------------------

/// The uploaded file could not be read as delimited tabular text.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("the file is empty or has no header row")]
    Empty,

    #[error("line {line}: expected {expected} fields but found {found}")]
    RaggedRow {
        line: u64,
        expected: u64,
        found: u64,
    },

    #[error("line {line}: the file is not valid UTF-8 text")]
    Encoding { line: u64 },

    #[error("reading file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(csv::Error),
}

impl From<csv::Error> for ParseError {
    fn from(err: csv::Error) -> Self {
        let line = |pos: &Option<csv::Position>| pos.as_ref().map_or(0, |p| p.line());
        let mapped = match err.kind() {
            csv::ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } => Some(ParseError::RaggedRow {
                line: line(pos),
                expected: *expected_len,
                found: *len,
            }),
            csv::ErrorKind::Utf8 { pos, .. } => Some(ParseError::Encoding { line: line(pos) }),
            _ => None,
        };
        mapped.unwrap_or(ParseError::Csv(err))
    }
}

// ---------------------------------------------------------------------------
// Column validation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required feature columns absent from the upload, in schema order.
    #[error("Missing columns in CSV: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

// ---------------------------------------------------------------------------
// Model inference
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("model expects {expected} features but the input has {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("row {row}, column '{column}': could not convert '{value}' to a finite number")]
    NonNumeric {
        row: usize,
        column: String,
        value: String,
    },

    #[error("model produced a non-finite prediction for row {row}")]
    NonFiniteOutput { row: usize },

    #[error("model returned {found} predictions for {expected} rows")]
    OutputLength { expected: usize, found: usize },
}

/// Any recoverable failure of the upload → predict pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

// ---------------------------------------------------------------------------
// Model artifact
// ---------------------------------------------------------------------------

/// The model artifact is missing, unreadable or structurally invalid.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("cannot read model artifact '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model artifact is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("model was trained on features {found:?}, expected {expected:?}")]
    FeatureNames {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("linear model has {found} coefficients for {expected} features")]
    CoefficientCount { expected: usize, found: usize },

    #[error("tree splits on feature {index} but the model has {n_features} features")]
    SplitFeature { index: usize, n_features: usize },

    #[error("ensemble model contains no trees")]
    EmptyEnsemble,

    #[error("model parameter '{0}' is not a finite number")]
    NonFinite(&'static str),
}
