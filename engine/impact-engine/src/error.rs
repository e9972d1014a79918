//! Error types for the impact engine

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for analysis and reporting operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Errors that can occur while analyzing or reporting
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// An upstream artifact has not been produced yet
    #[error("Artifact not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// An artifact lacks a column this stage needs
    #[error("Column {column} missing from {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },

    /// CSV read/write errors (includes non-numeric cells)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Chart rendering errors
    #[error("Chart error: {0}")]
    Chart(String),
}

impl AnalyticsError {
    /// Create a new chart error
    pub fn chart(msg: impl Into<String>) -> Self {
        Self::Chart(msg.into())
    }
}
