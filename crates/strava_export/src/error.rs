//! Custom error types for the export pipeline.

use thiserror::Error;

/// Export pipeline errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Strava client error: {0}")]
    Client(#[from] strava_client::StravaError),

    #[error("activity is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
