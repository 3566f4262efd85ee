//! Error types for the rowcheck library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rowcheck operations.
#[derive(Debug, Error)]
pub enum RowcheckError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error reading from or writing to the operator's terminal.
    #[error("Terminal IO error: {0}")]
    Terminal(#[source] std::io::Error),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex compilation error.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Empty file or no data to validate.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The input table lacks one or more required columns.
    #[error("Missing required columns: {missing:?}. Expected: {expected:?}")]
    MissingColumns {
        missing: Vec<String>,
        expected: Vec<String>,
    },
}

impl RowcheckError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RowcheckError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for rowcheck operations.
pub type Result<T> = std::result::Result<T, RowcheckError>;
