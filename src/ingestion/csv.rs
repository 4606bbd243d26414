//! CSV ingestion implementation.

use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{DataSet, Schema, Value};

/// Ingest a CSV file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain all required schema fields (order can differ).
/// - Optional fields missing from the header read as [`Value::Null`].
/// - Each value is parsed leniently via [`crate::types::Field::parse`].
/// - Every record is a row, including all-blank ones such as `,,,`.
pub fn ingest_csv_from_path(path: impl AsRef<Path>, schema: &Schema) -> IngestionResult<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr, schema)
}

/// Ingest CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    schema: &Schema,
) -> IngestionResult<DataSet> {
    let headers = rdr.headers()?.clone();

    // Map schema fields -> CSV column indexes (allows re-ordered CSV columns).
    let mut col_idxs: Vec<Option<usize>> = Vec::with_capacity(schema.fields.len());
    for field in &schema.fields {
        let idx = headers.iter().position(|h| h.trim() == field.name);
        if idx.is_none() && field.required {
            return Err(IngestionError::SchemaMismatch {
                message: format!(
                    "missing required column '{field}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>(),
                    field = field.name
                ),
            });
        }
        col_idxs.push(idx);
    }

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for result in rdr.records() {
        let record = result?;

        let row = schema
            .fields
            .iter()
            .zip(col_idxs.iter())
            .map(|(field, idx)| match idx {
                Some(i) => field.parse(record.get(*i).unwrap_or("")),
                None => Value::Null,
            })
            .collect();
        rows.push(row);
    }

    Ok(DataSet::new(schema.clone(), rows))
}
