//! Error types for rb-output.

use thiserror::Error;

/// Errors that can occur while reading a batch or writing its results.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("batch input is missing required column {0:?}")]
    MissingColumn(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
