use thiserror::Error;

use crate::path::FieldPath;

/// Errors from configuration store operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No value is stored at the requested path.
    ///
    /// Raised by `get` when the owner document, or the requested field
    /// within it, does not exist. Callers needing defaults apply them
    /// above this layer.
    #[error("no value stored at `{path}`")]
    NotFound { path: String },

    /// An identifier path must contain at least one segment.
    ///
    /// Signals a programmer error, not a runtime condition; produced
    /// synchronously at path construction, before any backend I/O.
    #[error("identifier path is empty")]
    EmptyPath,

    /// The backend session failed (timeout, auth failure, partition).
    ///
    /// Never retried internally; retry policy is a caller concern.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// Value or configuration encode/decode failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Not-found error for the given path.
    pub fn not_found(path: &FieldPath) -> Self {
        Self::NotFound {
            path: path.encode(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Result alias for configuration store operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_path() {
        let path = FieldPath::new(["users", "42", "balance"]).unwrap();
        let err = ConfigError::not_found(&path);
        assert_eq!(err.to_string(), "no value stored at `users.42.balance`");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline elapsed");
        let err: ConfigError = io.into();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn serde_error_converts_to_serialization() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json");
        let err: ConfigError = bad.unwrap_err().into();
        assert!(matches!(err, ConfigError::Serialization(_)));
    }
}
