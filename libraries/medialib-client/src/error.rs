//! Error types for the media library client.

use std::fmt;
use thiserror::Error;

/// Errors that can occur when talking to the media library API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed (transport error or timeout)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Server returned a non-2xx response that is not a client mistake
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Server rejected the request payload (4xx other than 404)
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Target entity does not exist on the server
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid base URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Coarse classification used by callers to decide how to react.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Rejected { .. } => ErrorKind::Validation,
            ClientError::NotFound(_) => ErrorKind::NotFound,
            ClientError::Request(_)
            | ClientError::ServerUnreachable(_)
            | ClientError::ServerError { .. }
            | ClientError::InvalidUrl(_)
            | ClientError::ParseError(_) => ErrorKind::Network,
        }
    }
}

/// Error categories surfaced to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Field checks failed, locally or on the server
    Validation,
    /// Transport failure, timeout or unexpected status
    Network,
    /// Delete or update target is missing
    NotFound,
    /// Mutation requested for an entity type nobody handles
    UnknownEntity,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Network => "network",
            ErrorKind::NotFound => "not found",
            ErrorKind::UnknownEntity => "unknown entity",
        };
        f.write_str(name)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
