//! Error types for telelink client operations

use thiserror::Error;

/// Result type alias for telelink client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during telelink client operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Server rejected or failed the request
    #[error("Server error {status}: {message}")]
    ServerError {
        status: u16,
        /// Machine-readable error code (`vehicle_not_found`, ...)
        code: String,
        message: String,
        /// Operation the failure belongs to, if any
        operation: Option<String>,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Timeout
    #[error("Request timed out")]
    Timeout,
}

impl ClientError {
    /// Create a server error from status code and message
    pub fn server_error(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            code: code.into(),
            message: message.into(),
            operation: None,
        }
    }

    /// Error code reported by the server, if this is a server error
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::ServerError { code, .. } => Some(code),
            _ => None,
        }
    }
}
