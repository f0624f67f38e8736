use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, FeeError>;

/// Failures raised while handling dates or producing the late-fee report.
#[derive(Debug, Error)]
pub enum FeeError {
    /// Raised when a date-range function receives an argument it cannot use.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Raised when a date string does not match the expected format.
    #[error("invalid date '{value}' (expected format {format}): {source}")]
    InvalidDate {
        value: String,
        format: &'static str,
        #[source]
        source: chrono::ParseError,
    },

    /// Raised when a checkout row carries fewer fields than the schema requires.
    #[error(
        "malformed checkout record on line {line}: expected {expected} fields, found {found}",
        expected = crate::csv_handler::CHECKOUT_FIELDS
    )]
    MalformedRow { line: u64, found: usize },

    /// Errors bubbled up from the CSV reader or writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when the input file does not exist.
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Raised when the report file cannot be created.
    #[error("cannot write report to {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for any other IO failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
