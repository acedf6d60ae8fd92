//! Error types for the research scout.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::path::PathBuf;
use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Page not found (404 response)
    #[error("Page not found: {url}")]
    NotFound {
        /// URL that was requested
        url: String,
    },

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Server error (5xx response)
    #[error("Server error ({status}): {url}")]
    Server {
        /// HTTP status code
        status: u16,
        /// URL that was requested
        url: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {url}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// URL that was requested
        url: String,
    },
}

impl ClientError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(url: impl Into<String>) -> Self {
        Self::NotFound { url: url.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, url: impl Into<String>) -> Self {
        Self::Server { status, url: url.into() }
    }

    /// HTTP status carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Server { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Http(_) | Self::Timeout(_) => None,
        }
    }

    /// Returns true if the remote host answered, as opposed to a transport failure.
    #[must_use]
    pub const fn is_http_status(&self) -> bool {
        self.status().is_some()
    }
}

/// Errors from running a pipeline.
#[derive(thiserror::Error, Debug)]
pub enum ScoutError {
    /// Error from the portal client
    #[error("Portal error: {0}")]
    Client(#[from] ClientError),

    /// A required input file does not exist
    #[error("The file '{}' does not exist", path.display())]
    MissingInput {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Reading or writing a file failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configured URL could not be parsed
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        /// Offending URL
        url: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },

    /// Language model request failed
    #[error("Language model error: {0}")]
    Model(String),
}

impl ScoutError {
    /// Create an I/O error bound to a path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Create a language model error.
    #[must_use]
    pub fn model(message: impl Into<String>) -> Self {
        Self::Model(message.into())
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for pipeline operations.
pub type ScoutResult<T> = Result<T, ScoutError>;
