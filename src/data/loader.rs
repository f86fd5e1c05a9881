use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ParseError;

use super::table::Table;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load an uploaded CSV file from disk.
pub fn load_csv(path: &Path) -> Result<Table, ParseError> {
    let file = File::open(path)?;
    parse_csv(file)
}

/// Parse delimited text with a header row into a [`Table`].
///
/// * the first record names the columns; a leading UTF-8 BOM is dropped
/// * duplicate names become `name.1`, `name.2`, …
/// * short rows are padded with empty cells; rows longer than the header
///   are rejected
/// * a header without data rows is a valid, empty table
pub fn parse_csv<R: Read>(reader: R) -> Result<Table, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let raw_headers = reader.headers()?.clone();
    if raw_headers.is_empty() {
        return Err(ParseError::Empty);
    }
    let headers = dedupe_headers(
        raw_headers
            .iter()
            .enumerate()
            .map(|(i, h)| if i == 0 { h.trim_start_matches('\u{feff}') } else { h }),
    );

    let width = headers.len();
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() > width {
            return Err(ParseError::RaggedRow {
                line: record.position().map_or(0, |p| p.line()),
                expected: width as u64,
                found: record.len() as u64,
            });
        }
        let mut row: Vec<String> = record.iter().map(|cell| cell.to_string()).collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    Ok(Table::new(headers, rows))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Rename repeated column names so every header is unique.
fn dedupe_headers<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let names: Vec<&str> = names.collect();
    let mut used: HashSet<String> = names.iter().map(|n| n.to_string()).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::with_capacity(names.len());

    for name in names {
        if seen.insert(name) {
            out.push(name.to_string());
            continue;
        }
        let mut counter = 1;
        let renamed = loop {
            let candidate = format!("{name}.{counter}");
            if !used.contains(&candidate) {
                break candidate;
            }
            counter += 1;
        };
        used.insert(renamed.clone());
        out.push(renamed);
    }
    out
}
