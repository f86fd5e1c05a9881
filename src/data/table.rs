// ---------------------------------------------------------------------------
// Table – an uploaded CSV, cells kept as the raw text that was read
// ---------------------------------------------------------------------------

/// A parsed delimited file: header names plus rows of raw cell text.
///
/// Cells stay untyped so an exported table reproduces the uploaded columns
/// byte for byte; numbers are only interpreted when features are selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Table { headers, rows }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn n_columns(&self) -> usize {
        self.headers.len()
    }

    /// Position of a column by exact (case-sensitive) name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// All cells of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
                .collect(),
        )
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> Table {
        Table {
            headers: self.headers.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Copy of the table with `values` stored under `name`.
    ///
    /// An existing column of that name is overwritten in place, otherwise
    /// the column is appended. `values` must hold one entry per row.
    pub fn with_column(&self, name: &str, values: &[f64]) -> Table {
        debug_assert_eq!(values.len(), self.rows.len());
        let mut out = self.clone();
        let idx = match out.column_index(name) {
            Some(idx) => idx,
            None => {
                out.headers.push(name.to_string());
                for row in &mut out.rows {
                    row.push(String::new());
                }
                out.headers.len() - 1
            }
        };
        for (row, value) in out.rows.iter_mut().zip(values) {
            row[idx] = value.to_string();
        }
        out
    }
}

// ---------------------------------------------------------------------------
// FeatureMatrix – numeric model input in schema order
// ---------------------------------------------------------------------------

/// Row-major `f64` matrix whose columns are named and ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    columns: Vec<String>,
    data: Vec<f64>,
    n_rows: usize,
}

impl FeatureMatrix {
    /// Build from rows; every row must have one value per column.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        let n_rows = rows.len();
        let data: Vec<f64> = rows.into_iter().flatten().collect();
        debug_assert_eq!(data.len(), n_rows * columns.len());
        FeatureMatrix {
            columns,
            data,
            n_rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn row(&self, i: usize) -> &[f64] {
        let w = self.n_cols();
        &self.data[i * w..(i + 1) * w]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.n_rows).map(move |i| self.row(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["a".into(), "b".into()],
            vec![
                vec!["1".into(), "x".into()],
                vec!["2".into(), "y".into()],
                vec!["3".into(), "z".into()],
            ],
        )
    }

    #[test]
    fn head_keeps_headers_and_first_rows() {
        let head = sample().head(2);
        assert_eq!(head.headers, vec!["a", "b"]);
        assert_eq!(head.len(), 2);
        assert_eq!(sample().head(10).len(), 3);
    }

    #[test]
    fn with_column_appends_new_column() {
        let out = sample().with_column("p", &[1.5, 2.0, -0.25]);
        assert_eq!(out.headers, vec!["a", "b", "p"]);
        assert_eq!(out.column("p").unwrap(), vec!["1.5", "2", "-0.25"]);
        assert_eq!(out.column("b").unwrap(), vec!["x", "y", "z"]);
    }

    #[test]
    fn with_column_overwrites_existing_column() {
        let out = sample().with_column("a", &[9.0, 8.0, 7.0]);
        assert_eq!(out.n_columns(), 2);
        assert_eq!(out.column("a").unwrap(), vec!["9", "8", "7"]);
    }

    #[test]
    fn column_lookup_is_case_sensitive() {
        assert!(sample().column_index("A").is_none());
        assert_eq!(sample().column_index("b"), Some(1));
    }

    #[test]
    fn feature_matrix_rows() {
        let m = FeatureMatrix::from_rows(
            vec!["x".into(), "y".into()],
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        );
        assert_eq!(m.n_rows(), 2);
        assert_eq!(m.n_cols(), 2);
        assert_eq!(m.row(1), &[3.0, 4.0]);
        assert_eq!(m.rows().count(), 2);
    }
}
