//! Error types for the roster store

use std::path::PathBuf;
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error reading or writing the backing file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error during save
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Every decode attempt failed, including the byte-level sniffer guess
    #[error("unable to read {}: no supported encoding produced a roster table", path.display())]
    Undecodable {
        /// The backing file that could not be read
        path: PathBuf,
    },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while parsing one decoded candidate into the canonical table.
///
/// Recovered internally by moving on to the next encoding candidate; only
/// the log events carry it out of the load path.
#[derive(Debug, Error)]
pub(crate) enum ParseError {
    /// Malformed CSV structure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A non-empty cell that does not parse as its column type
    #[error("row {row}, column {column}: {message}")]
    Field {
        row: usize,
        column: &'static str,
        message: String,
    },
}
