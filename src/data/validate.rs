use std::collections::HashSet;

use crate::error::{PredictionError, ValidationError};

use super::schema::FEATURES;
use super::table::{FeatureMatrix, Table};

// ---------------------------------------------------------------------------
// Column presence
// ---------------------------------------------------------------------------

/// Schema names absent from `headers`, in schema order.
///
/// Matching is exact and case-sensitive; header order and extra headers do
/// not matter.
pub fn missing_columns(headers: &[String], schema: &[&str]) -> Vec<String> {
    let present: HashSet<&str> = headers.iter().map(String::as_str).collect();
    schema
        .iter()
        .filter(|name| !present.contains(*name))
        .map(|name| name.to_string())
        .collect()
}

/// Positions of the feature columns in `table`, in schema order.
pub fn check_columns(table: &Table) -> Result<Vec<usize>, ValidationError> {
    let missing = missing_columns(&table.headers, &FEATURES);
    if !missing.is_empty() {
        return Err(ValidationError::MissingColumns(missing));
    }
    Ok(FEATURES
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect())
}

// ---------------------------------------------------------------------------
// Feature selection
// ---------------------------------------------------------------------------

/// Select the feature columns at `indices` and convert them to numbers.
///
/// Fails on the first cell that is empty, non-numeric or non-finite; the
/// reported row is 1-based over data rows.
pub fn feature_matrix(table: &Table, indices: &[usize]) -> Result<FeatureMatrix, PredictionError> {
    let columns: Vec<String> = indices.iter().map(|&i| table.headers[i].clone()).collect();

    let mut rows = Vec::with_capacity(table.len());
    for (row_no, row) in table.rows.iter().enumerate() {
        let values = indices
            .iter()
            .map(|&i| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                parse_cell(cell).ok_or_else(|| PredictionError::NonNumeric {
                    row: row_no + 1,
                    column: table.headers[i].clone(),
                    value: cell.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;
        rows.push(values);
    }

    Ok(FeatureMatrix::from_rows(columns, rows))
}

fn parse_cell(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
