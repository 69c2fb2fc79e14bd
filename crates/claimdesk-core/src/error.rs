//! Error types module
//!
//! All failures that reach the HTTP boundary are unified under `AppError`. Each
//! variant belongs to one of three kinds (validation, not-found, storage fault)
//! so callers branch on `ErrorKind` instead of message content.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for client-caused limits such as oversized payloads
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Coarse classification of an error, independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    StorageFault,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "INVALID_INPUT")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from clients
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Storage(format!("IO error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, sensitive, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, LogLevel) {
    match err {
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", false, LogLevel::Debug),
        AppError::NotFound(_) => (404, "NOT_FOUND", false, LogLevel::Debug),
        AppError::PayloadTooLarge(_) => (413, "PAYLOAD_TOO_LARGE", false, LogLevel::Warn),
        AppError::Storage(_) => (500, "STORAGE_ERROR", true, LogLevel::Error),
        AppError::Internal(_) | AppError::InternalWithSource { .. } => {
            (500, "INTERNAL_ERROR", true, LogLevel::Error)
        }
    }
}

impl AppError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &str {
        match self {
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::NotFound(_) => "NotFound",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Storage(_) => "Storage",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidInput(_) | AppError::PayloadTooLarge(_) => ErrorKind::Validation,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Storage(_) | AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                ErrorKind::StorageFault
            }
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::NotFound(ref msg) => msg.clone(),
            AppError::PayloadTooLarge(ref msg) => msg.clone(),
            AppError::Storage(_) => "Failed to access storage".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            AppError::InternalWithSource { .. } => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_metadata_not_found() {
        let err = AppError::NotFound("Claim not found".to_string());
        assert_eq!(err.http_status_code(), 404);
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert_eq!(err.client_message(), "Claim not found");
        assert!(!err.is_sensitive());
        assert_eq!(err.log_level(), LogLevel::Debug);
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_error_metadata_storage_hides_message() {
        let err = AppError::Storage("disk on fire at /var/lib/claims".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.error_code(), "STORAGE_ERROR");
        assert_eq!(err.client_message(), "Failed to access storage");
        assert!(err.is_sensitive());
        assert_eq!(err.kind(), ErrorKind::StorageFault);
    }

    #[test]
    fn test_payload_too_large_is_validation() {
        let err = AppError::PayloadTooLarge("over 16 MB".to_string());
        assert_eq!(err.http_status_code(), 413);
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.log_level(), LogLevel::Warn);
    }

    #[test]
    fn test_io_error_is_storage_fault() {
        let err: AppError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.kind(), ErrorKind::StorageFault);
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_detailed_message_includes_source_chain() {
        let err: AppError = anyhow::anyhow!("root cause").context("outer").into();
        let details = err.detailed_message();
        assert!(details.contains("Caused by"));
    }
}
