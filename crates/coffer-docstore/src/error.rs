use coffer_core::ConfigError;
use thiserror::Error;

/// Errors from the document-store wire transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The backend cannot be reached (connection refused, partition).
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The operation did not complete within the transport's deadline.
    #[error("operation timed out: {0}")]
    Timeout(String),

    /// The backend rejected the session's credentials.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// A request or reply could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying connection.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

impl From<TransportError> for ConfigError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Io(io) => ConfigError::Io(io),
            TransportError::Serialization(s) => ConfigError::Serialization(s),
            other => ConfigError::Unavailable(other.to_string()),
        }
    }
}
