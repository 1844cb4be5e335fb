use medialib_client::{ClientError, ErrorKind};
use thiserror::Error;

/// Errors that can occur while reconciling or mutating the library
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Gateway error: {0}")]
    Client(#[from] ClientError),

    #[error("Unknown entity type: {0}")]
    UnknownEntity(String),
}

impl SyncError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SyncError::Validation(_) => ErrorKind::Validation,
            SyncError::Client(e) => e.kind(),
            SyncError::UnknownEntity(_) => ErrorKind::UnknownEntity,
        }
    }

    /// Individual violation messages, empty for non-validation errors.
    pub fn violations(&self) -> &[String] {
        match self {
            SyncError::Validation(messages) => messages,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
