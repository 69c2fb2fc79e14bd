//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`. Domain errors
//! (`AppError`, `StorageError`, `RepositoryError`) convert into `HttpAppError`
//! with `?`, and every failure renders as the same JSON envelope:
//! `{"success": false, "error": ..., "code": ...}`.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::PathRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use claimdesk_core::{AppError, ErrorMetadata, LogLevel};
use claimdesk_db::RepositoryError;
use claimdesk_storage::StorageError;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use utoipa::ToSchema;

static PRODUCTION: AtomicBool = AtomicBool::new(false);

/// Select whether error bodies may carry diagnostic details.
///
/// Set once from `Config::is_production` during startup.
pub fn set_production_mode(production: bool) {
    PRODUCTION.store(production, Ordering::Relaxed);
}

fn is_production() -> bool {
    PRODUCTION.load(Ordering::Relaxed)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    pub error: String,
    /// Machine-readable error code for programmatic handling
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from claimdesk-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::from(err))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Error occurred");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        // Details only outside production, and never for sensitive errors.
        let show_details = !is_production() && !app_error.is_sensitive();
        let body = ErrorResponse {
            success: false,
            error: app_error.client_message(),
            code: app_error.error_code().to_string(),
            details: show_details.then(|| app_error.detailed_message()),
            error_type: show_details.then(|| app_error.error_type().to_string()),
        };

        (status, Json(body)).into_response()
    }
}

// Convert domain errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::NotFound(msg) => AppError::NotFound(msg),
            StorageError::InvalidKey(msg) => AppError::InvalidInput(msg),
            StorageError::UploadFailed(msg)
            | StorageError::DownloadFailed(msg)
            | StorageError::ConfigError(msg) => AppError::Storage(msg),
            StorageError::IoError(err) => AppError::Storage(format!("IO error: {}", err)),
        };
        HttpAppError(app)
    }
}

impl From<RepositoryError> for HttpAppError {
    fn from(err: RepositoryError) -> Self {
        let app = match err {
            RepositoryError::InvalidKey(msg) => AppError::InvalidInput(msg),
            RepositoryError::Io { .. } => AppError::Storage(err.to_string()),
            RepositoryError::Serialization { .. } => AppError::InternalWithSource {
                message: "Failed to decode claim record".to_string(),
                source: anyhow::Error::new(err),
            },
        };
        HttpAppError(app)
    }
}

/// Oversized bodies surface as 413, everything else as a malformed request.
impl From<MultipartError> for HttpAppError {
    fn from(err: MultipartError) -> Self {
        let app = if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(err.body_text())
        } else {
            AppError::InvalidInput(format!("Failed to read multipart: {}", err.body_text()))
        };
        HttpAppError(app)
    }
}

impl From<MultipartRejection> for HttpAppError {
    fn from(rejection: MultipartRejection) -> Self {
        HttpAppError(AppError::InvalidInput(format!(
            "Invalid multipart request: {}",
            rejection.body_text()
        )))
    }
}

impl From<PathRejection> for HttpAppError {
    fn from(rejection: PathRejection) -> Self {
        HttpAppError(AppError::InvalidInput(rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_renders_envelope() {
        let response =
            HttpAppError(AppError::NotFound("Claim not found".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Claim not found");
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_storage_error_hides_paths() {
        let err: HttpAppError =
            StorageError::UploadFailed("Failed to create file /srv/uploads/x".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to access storage");
        assert!(body.get("details").is_none());
        assert!(!body.to_string().contains("/srv/uploads"));
    }

    #[test]
    fn test_repository_invalid_key_is_validation() {
        let err: HttpAppError = RepositoryError::InvalidKey("bad".to_string()).into();
        assert!(matches!(err.0, AppError::InvalidInput(_)));
    }
}
