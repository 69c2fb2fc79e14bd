use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::{collect_claim_form, UploadedFile};
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use chrono::Utc;
use claimdesk_core::models::{AttachmentKind, AttachmentReference, ClaimRecord};
use claimdesk_storage::StorageResult;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitClaimResponse {
    pub success: bool,
    #[serde(rename = "uploadedFiles")]
    pub uploaded_files: Vec<AttachmentReference>,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/submit_claim",
    tag = "claims",
    request_body(
        content = inline(Object),
        content_type = "multipart/form-data",
        description = "Fields: claimId, claimAmount, description, optional pdfDocument, repeated imageEvidence"
    ),
    responses(
        (status = 200, description = "Claim stored", body = SubmitClaimResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn submit_claim(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SubmitClaimResponse>, HttpAppError> {
    let form = collect_claim_form(multipart?).await?;
    let submission = form.validate()?;
    let claim_id = submission.claim_id;

    let mut uploaded_files = Vec::new();
    if let Some(document) = submission.document {
        store_file(&state, AttachmentKind::Document, &claim_id, document, &mut uploaded_files)
            .await?;
    }
    for image in submission.images {
        store_file(&state, AttachmentKind::Image, &claim_id, image, &mut uploaded_files).await?;
    }

    let record = ClaimRecord::new(
        claim_id.clone(),
        submission.claim_amount,
        submission.description,
        uploaded_files,
        Utc::now(),
    );
    state.claims.save(&record).await?;

    tracing::info!(
        claim_id = %claim_id,
        claim_amount = record.claim_amount,
        files_count = record.uploaded_files.len(),
        "Claim submitted"
    );

    Ok(Json(SubmitClaimResponse {
        success: true,
        message: format!("Claim {} submitted successfully", claim_id),
        uploaded_files: record.uploaded_files,
    }))
}

/// Store one part; skipped parts (no name or disallowed extension) add nothing.
async fn store_file(
    state: &AppState,
    kind: AttachmentKind,
    claim_id: &str,
    file: UploadedFile,
    uploaded_files: &mut Vec<AttachmentReference>,
) -> StorageResult<()> {
    if let Some(reference) = state
        .store
        .store(kind, claim_id, &file.filename, file.data)
        .await?
    {
        uploaded_files.push(reference);
    }
    Ok(())
}
