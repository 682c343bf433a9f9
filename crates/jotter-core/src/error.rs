//! Error types for jotter.

use thiserror::Error;

/// Result type alias using jotter's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for jotter operations.
///
/// `Validation` and `NotFound` are client-caused; every other variant is an
/// internal failure whose details must not reach the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// Payload failed the shape check
    #[error("{0}")]
    Validation(String),

    /// Referenced note does not exist
    #[error("{0}")]
    NotFound(String),

    /// Storage backend failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the failure is attributable to the caller's request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::NotFound(_))
    }

    /// HTTP-style status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            Error::NotFound(_) => 404,
            _ => 500,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let err = Error::Validation("\"body\" is required".to_string());
        assert_eq!(err.to_string(), "\"body\" is required");
    }

    #[test]
    fn test_error_display_not_found() {
        let err = Error::NotFound("Note not found".to_string());
        assert_eq!(err.to_string(), "Note not found");
    }

    #[test]
    fn test_error_display_storage() {
        let err = Error::Storage("disk full".to_string());
        assert_eq!(err.to_string(), "Storage error: disk full");
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("NOTES_STORE must be memory or file".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: NOTES_STORE must be memory or file"
        );
    }

    #[test]
    fn test_error_display_internal() {
        let err = Error::Internal("unexpected state".to_string());
        assert_eq!(err.to_string(), "Internal error: unexpected state");
    }

    #[test]
    fn test_client_errors_are_classified() {
        assert!(Error::Validation("x".into()).is_client_error());
        assert!(Error::NotFound("x".into()).is_client_error());
        assert!(!Error::Storage("x".into()).is_client_error());
        assert!(!Error::Internal("x".into()).is_client_error());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::Validation("x".into()).status_code(), 400);
        assert_eq!(Error::NotFound("x".into()).status_code(), 404);
        assert_eq!(Error::Serialization("x".into()).status_code(), 500);
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(Error::Io(io_err).status_code(), 500);
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        match err {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: Error = io_err.into();
        match err {
            Error::Io(_) => {}
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
