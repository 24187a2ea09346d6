//! Error types for paper-vista.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

/// Errors from loading the paper payload.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("Failed to load data. Status: {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Payload is not valid JSON
    #[error("Failed to parse payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// Payload is JSON but not `{ "papers": [...] }`
    #[error("Data format is invalid: {0}")]
    InvalidShape(String),

    /// Local file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data source string could not be interpreted
    #[error("Invalid data source: {0}")]
    InvalidSource(String),
}

impl LoadError {
    /// Create a status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }

    /// Create an invalid shape error.
    #[must_use]
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape(message.into())
    }

    /// Message rendered in place of the result cards.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        "Failed to load data. Please check the logs for details.".to_string()
    }
}

/// Errors from exporting the filtered set.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    /// Nothing matched the current filters
    #[error("No data available to export.")]
    Empty,

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing the artifact failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
