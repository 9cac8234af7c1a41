//! Error types for the Surveyor library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Surveyor operations.
///
/// The analysis engine itself never returns these: its failures are carried
/// as data inside [`crate::AnalysisResult`]. They come from loading input
/// files and validating configuration.
#[derive(Debug, Error)]
pub enum SurveyorError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input is structurally valid JSON but not a survey export.
    #[error("Invalid record at index {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SurveyorError {
    /// Wrap an IO error with the path it concerns.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SurveyorError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for Surveyor operations.
pub type Result<T> = std::result::Result<T, SurveyorError>;
