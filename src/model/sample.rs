// ---------------------------------------------------------------------------
// Sample linear model written by `generate_sample`
// ---------------------------------------------------------------------------

use serde_json::{json, Value};

/// With every feature at 0.5 the model predicts 41.23.
pub const SAMPLE_INTERCEPT: f64 = 20.0;
pub const SAMPLE_COEFFICIENTS: [f64; 13] = [
    4.0, 2.0, 3.0, 3.5, 5.0, 6.0, 8.0, 1.0, 2.5, 1.5, 0.5, 1.46, 4.0,
];

/// Artifact JSON for the sample model trained on `features`.
pub fn sample_model_json(features: &[&str]) -> Value {
    json!({
        "feature_names": features,
        "kind": "linear",
        "intercept": SAMPLE_INTERCEPT,
        "coefficients": SAMPLE_COEFFICIENTS,
    })
}
