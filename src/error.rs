use std::path::PathBuf;

use thiserror::Error;

use crate::normalize::SourceKind;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by format-level ingestion functions.
///
/// Unparseable cells are never reported here: they are read as [`crate::types::Value::Null`]
/// and later replaced by zero during normalization.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON ingestion error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not conform to the provided schema (missing required columns, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },
}

impl IngestionError {
    /// Returns `true` if the error came from the filesystem rather than the file contents.
    pub fn is_io(&self) -> bool {
        match self {
            IngestionError::Io(_) => true,
            IngestionError::Csv(err) => matches!(err.kind(), csv::ErrorKind::Io(_)),
            IngestionError::Json(err) => err.is_io(),
            IngestionError::SchemaMismatch { .. } => false,
        }
    }
}

/// Error returned by [`crate::normalize::DatasetNormalizer::load`].
///
/// There is exactly one kind: a required source could not be located or read. Loading is
/// all-or-nothing, so when this is returned no table is usable.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("required data source '{kind}' could not be loaded from {}: {cause}", path.display())]
    SourceUnavailable {
        kind: SourceKind,
        path: PathBuf,
        #[source]
        cause: IngestionError,
    },
}

impl LoadError {
    /// The source that failed.
    pub fn kind(&self) -> SourceKind {
        match self {
            LoadError::SourceUnavailable { kind, .. } => *kind,
        }
    }
}
