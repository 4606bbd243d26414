//! Raw, schema-first data model filled by ingestion.
//!
//! Sources are ingested into an in-memory [`DataSet`] shaped by a [`Schema`] (a list of typed
//! [`Field`]s). Parsing is lenient: a numeric cell that does not parse becomes [`Value::Null`]
//! and is left for [`crate::normalize`] to replace with zero.

/// Logical data type for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// UTF-8 string.
    Utf8,
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name as it appears in the source header.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
    /// If `false`, the column may be absent and every row reads as [`Value::Null`].
    pub required: bool,
    /// Annotation character stripped from the end of raw tokens before parsing (e.g. `*`).
    pub trailing_marker: Option<char>,
}

impl Field {
    /// Create a new required field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            required: true,
            trailing_marker: None,
        }
    }

    /// Create a field whose column may be missing from the source.
    pub fn optional(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            required: false,
            ..Self::new(name, data_type)
        }
    }

    /// Strip any trailing run of `marker` from raw tokens before parsing.
    pub fn with_trailing_marker(mut self, marker: char) -> Self {
        self.trailing_marker = Some(marker);
        self
    }

    /// Parse one raw token according to this field's type.
    ///
    /// Never fails: blank and unparseable tokens become [`Value::Null`]. Text is kept exactly as
    /// written (only a whitespace-only cell becomes `Null`); numeric tokens are trimmed first.
    pub fn parse(&self, raw: &str) -> Value {
        if raw.trim().is_empty() {
            return Value::Null;
        }
        if self.data_type == DataType::Utf8 {
            return Value::Utf8(raw.to_owned());
        }

        let mut token = raw.trim();
        if let Some(marker) = self.trailing_marker {
            token = token.trim_end_matches(marker).trim_end();
        }
        match self.data_type {
            DataType::Int64 => parse_int(token),
            _ => parse_float(token).map_or(Value::Null, Value::Float64),
        }
    }
}

/// Integers stay `Int64`; a numeric token with a fractional part stays `Float64` so nothing is
/// lost before normalization decides how to fit it.
fn parse_int(token: &str) -> Value {
    if let Ok(v) = token.parse::<i64>() {
        return Value::Int64(v);
    }
    match parse_float(token) {
        // "12.0" is an integer that went through a float column upstream.
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => Value::Int64(f as i64),
        Some(f) => Value::Float64(f),
        None => Value::Null,
    }
}

fn parse_float(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A list of fields describing the expected shape of a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// A single typed value in a [`DataSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing, blank or unparseable value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
