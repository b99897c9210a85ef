//! Error types for BrawlAPI operations.

use thiserror::Error;

/// Errors that can occur during BrawlAPI operations.
#[derive(Debug, Error)]
pub enum BrawlError {
    /// Client configuration is missing or invalid.
    #[error("BrawlAPI configuration error: {0}")]
    Configuration(String),

    /// A player or club tag failed validation.
    #[error("Invalid tag '{0}': expected digits and the letters PYLQGRJCUV")]
    InvalidTag(String),

    /// An argument failed validation before the request was made.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The transport failed to complete the request.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl BrawlError {
    /// Returns true if this error came from the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// The HTTP status code, if the server answered with a non-2xx status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport(TransportError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised by a [`Transport`](crate::Transport) implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("BrawlAPI error (HTTP {status}): {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Failure raised by a custom transport.
    #[error("Transport error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wrap an arbitrary error from a custom transport.
    pub fn other<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Other(err.into())
    }
}

/// Result type alias for BrawlAPI operations.
pub type Result<T> = core::result::Result<T, BrawlError>;
