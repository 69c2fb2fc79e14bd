use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{rejection::PathRejection, Path, State},
    http::{header, Response, StatusCode},
};
use claimdesk_core::validation::{validate_claim_id, validate_flat_filename};
use claimdesk_core::AppError;
use claimdesk_storage::StorageError;
use futures::StreamExt;
use std::sync::Arc;

fn file_not_found() -> HttpAppError {
    HttpAppError(AppError::NotFound("File not found".to_string()))
}

/// A requested name is served only if it is flat and is exactly
/// `<claim_id>_<8 hex>.<ext>`, so `C1` cannot reach files of `C1_x`.
fn is_claim_file(claim_id: &str, filename: &str) -> bool {
    if validate_claim_id(claim_id).is_err() || validate_flat_filename(filename).is_err() {
        return false;
    }
    let Some((suffix, extension)) = filename
        .strip_prefix(claim_id)
        .and_then(|rest| rest.strip_prefix('_'))
        .and_then(|rest| rest.split_once('.'))
    else {
        return false;
    };
    suffix.len() == 8
        && suffix.chars().all(|c| c.is_ascii_hexdigit())
        && !extension.is_empty()
        && !extension.contains('.')
}

#[utoipa::path(
    get,
    path = "/download_file/{claim_id}/{filename}",
    tag = "claims",
    params(
        ("claim_id" = String, Path, description = "Claim ID"),
        ("filename" = String, Path, description = "Saved attachment name (`<claim_id>_<hex>.<ext>`)")
    ),
    responses(
        (status = 200, description = "Attachment bytes", content_type = "application/octet-stream"),
        (status = 404, description = "File not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "download_file"))]
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Response<Body>, HttpAppError> {
    let Path((claim_id, filename)) = path?;
    if !is_claim_file(&claim_id, &filename) {
        return Err(file_not_found());
    }

    let stream = match state.store.open(&filename).await {
        Ok(stream) => stream,
        Err(StorageError::NotFound(_)) | Err(StorageError::InvalidKey(_)) => {
            return Err(file_not_found())
        }
        Err(e) => return Err(e.into()),
    };

    tracing::debug!(filename = %filename, "Streaming attachment");

    // Wrap storage stream for axum Body
    let body_stream = stream.map(|result| {
        result.map_err(|e| std::io::Error::other(format!("Storage stream error: {}", e)))
    });

    let content_type = mime_guess::from_path(&filename).first_or_octet_stream();
    let content_disposition = format!("attachment; filename=\"{}\"", filename);

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type.as_ref())
        .header(header::CONTENT_DISPOSITION, content_disposition.as_str())
        .body(Body::from_stream(body_stream))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_claim_file_requires_claim_prefix() {
        assert!(is_claim_file("C100", "C100_0a1b2c3d.pdf"));
        assert!(!is_claim_file("C100", "C1000_0a1b2c3d.pdf"));
        assert!(!is_claim_file("C100", "C200_0a1b2c3d.pdf"));
        assert!(!is_claim_file("C100", "C100_../../etc/passwd"));
        assert!(!is_claim_file("../x", "../x_0a1b2c3d.png"));
    }

    #[test]
    fn test_is_claim_file_rejects_files_of_underscored_sibling_claims() {
        assert!(is_claim_file("C1_x", "C1_x_0a1b2c3d.png"));
        assert!(!is_claim_file("C1", "C1_x_0a1b2c3d.png"));
        assert!(!is_claim_file("C1", "C1_0a1b2c3.png"));
        assert!(!is_claim_file("C1", "C1_0a1b2c3g.png"));
        assert!(!is_claim_file("C1", "C1_0a1b2c3d"));
        assert!(!is_claim_file("C1", "C1_0a1b2c3d."));
        assert!(!is_claim_file("C1", "C1_0a1b2c3d.tar.gz"));
    }
}
