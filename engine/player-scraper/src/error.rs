//! Error types for the box score scraper

use thiserror::Error;

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Errors that can occur while collecting box scores
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The request never produced a response (DNS, TLS, connection reset, ...)
    #[error("Network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be set up (bad user agent, TLS backend, ...)
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("HTTP request to {url} failed with status: {status}")]
    HttpStatus { url: String, status: reqwest::StatusCode },

    /// Malformed page content
    #[error("Parse error: {0}")]
    Parse(String),

    /// A required stat column is absent from a player's table
    #[error("Column {column} not found in box score table from {url}")]
    MissingColumn { column: String, url: String },

    /// A stat cell could not be coerced to a number
    #[error("Non-numeric value '{value}' in column {column} from {url}")]
    InvalidNumber { column: String, value: String, url: String },

    /// The player URL does not end in a `first-last` slug
    #[error("Cannot derive player name from URL: {0}")]
    InvalidPlayerSlug(String),

    /// CSV serialization errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O errors (artifact files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// Create a new parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// True for failures that happened before any page content was seen
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Client(_) | Self::HttpStatus { .. })
    }
}
