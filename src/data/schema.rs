// ---------------------------------------------------------------------------
// Feature schema – the columns the model was trained on
// ---------------------------------------------------------------------------

pub const N_FEATURES: usize = 13;

/// Canonical feature order expected by the model.
pub const FEATURES: [&str; N_FEATURES] = [
    "CO", "NO", "NOX", "NO2", "O3", "PM10", "PM25", "RH", "SO2", "TMP", "WDR", "WSP", "traffic",
];

/// Comma separated list used in hints and error messages.
pub fn feature_list() -> String {
    FEATURES.join(", ")
}

/// Owned copy of the schema, for comparisons against artifact metadata.
pub fn feature_names() -> Vec<String> {
    FEATURES.iter().map(|f| f.to_string()).collect()
}
