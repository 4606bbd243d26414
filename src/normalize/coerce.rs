//! Zero-substitution: turn lenient raw cells into clean, non-negative numbers.

use crate::types::{Schema, Value};

/// Coerce a raw cell to a non-negative count.
///
/// Returns `None` only when the cell holds no number at all (blank or unparseable). Fractional
/// values are truncated toward zero and negatives clamp to 0.
pub fn coerce_count(value: &Value) -> Option<u32> {
    match value {
        Value::Int64(n) => Some((*n).clamp(0, i64::from(u32::MAX)) as u32),
        Value::Float64(f) if f.is_finite() => Some(f.trunc().clamp(0.0, f64::from(u32::MAX)) as u32),
        Value::Utf8(s) => s.trim().parse::<f64>().ok().and_then(|f| coerce_count(&Value::Float64(f))),
        _ => None,
    }
}

/// Coerce a raw cell to a non-negative rate (average, economy, strike rate).
pub fn coerce_rate(value: &Value) -> Option<f64> {
    match value {
        Value::Float64(f) => Some(f.max(0.0)),
        Value::Int64(n) => Some((*n as f64).max(0.0)),
        Value::Utf8(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.max(0.0)),
        Value::Null => None,
    }
}

fn coerce_text(value: &Value) -> String {
    match value {
        Value::Utf8(s) => s.clone(),
        Value::Int64(n) => n.to_string(),
        Value::Float64(f) => f.to_string(),
        Value::Null => String::new(),
    }
}

/// Reads one [`crate::types::DataSet`] row by column name, applying the 0-substitution policy and
/// counting how many required numeric cells had to be defaulted.
pub(crate) struct RowReader<'a> {
    schema: &'a Schema,
    row: &'a [Value],
    defaulted: usize,
}

impl<'a> RowReader<'a> {
    pub(crate) fn new(schema: &'a Schema, row: &'a [Value]) -> Self {
        Self {
            schema,
            row,
            defaulted: 0,
        }
    }

    fn cell(&self, name: &str) -> (&'a Value, bool) {
        match self.schema.index_of(name) {
            Some(idx) => (
                self.row.get(idx).unwrap_or(&Value::Null),
                self.schema.fields[idx].required,
            ),
            None => (&Value::Null, false),
        }
    }

    pub(crate) fn text(&self, name: &str) -> String {
        coerce_text(self.cell(name).0)
    }

    pub(crate) fn count(&mut self, name: &str) -> u32 {
        let (value, required) = self.cell(name);
        coerce_count(value).unwrap_or_else(|| {
            if required {
                self.defaulted += 1;
            }
            0
        })
    }

    pub(crate) fn rate(&mut self, name: &str) -> f64 {
        let (value, required) = self.cell(name);
        coerce_rate(value).unwrap_or_else(|| {
            if required {
                self.defaulted += 1;
            }
            0.0
        })
    }

    /// Number of required numeric cells replaced by zero so far.
    pub(crate) fn defaulted(&self) -> usize {
        self.defaulted
    }
}
