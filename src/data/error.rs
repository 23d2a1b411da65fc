//! Error types for data operations
//!
//! Provides unified error handling for loading and validating the dataset.

use std::path::PathBuf;
use thiserror::Error;

pub use crate::constants::MAX_CSV_SIZE_MB;

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum DataError {
    /// The dataset file does not exist
    #[error("Dataset file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A required column is absent from the header
    #[error("Missing required column '{column}'")]
    MissingColumn { column: String },

    /// A row does not fit the expected schema
    #[error("Schema error at row {row}: {message}")]
    Schema { row: usize, message: String },

    /// A cell could not be converted to its column type
    #[error("Cannot parse {column} '{value}' at row {row}: {reason}")]
    Parse {
        row: usize,
        column: String,
        value: String,
        reason: String,
    },

    /// File is too large for eager loading
    #[error("File too large: {size_mb}MB (max {max_mb}MB)")]
    TooLarge { size_mb: u64, max_mb: usize },

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl DataError {
    /// Short category name shown on the failure page
    pub fn kind(&self) -> &'static str {
        match self {
            DataError::NotFound { .. } => "NotFoundError",
            DataError::MissingColumn { .. } | DataError::Schema { .. } => "SchemaError",
            DataError::Parse { .. } => "ParseError",
            DataError::TooLarge { .. } => "TooLargeError",
            DataError::Io(_) => "IoError",
            DataError::Polars(_) => "ReadError",
        }
    }
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
