/// Data layer: feature schema, tables, loading and validation.
///
/// Architecture:
/// ```text
///   upload.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table (raw cell text)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ validate  │  required columns present? → FeatureMatrix in schema order
///   └──────────┘
/// ```

pub mod loader;
pub mod schema;
pub mod table;
pub mod validate;
