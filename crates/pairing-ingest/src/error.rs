//! Error types for assignment ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading assignment files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// Input file not found.
    #[error("Assignment file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read or parse a CSV file.
    #[error("Failed to read CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to parse CSV from an in-memory reader.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Employee identifier cannot be ordered numerically.
    #[error("Non-numeric EmpID '{value}' in data row {row}")]
    NonNumericEmployeeId { row: usize, value: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
