//! Error types for dataset lookups and export.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthDataError {
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Unknown county: {0}")]
    UnknownCounty(String),

    #[error("No data for year {0}")]
    UnknownYear(u16),

    /// A CSV export could not be read back.
    #[error("Malformed export at row {row}: {reason}")]
    MalformedExport { row: usize, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HealthDataError>;
