use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use claimdesk_core::models::ClaimRecord;
use claimdesk_core::AppError;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct GetClaimResponse {
    pub success: bool,
    pub claim_data: ClaimRecord,
}

#[utoipa::path(
    get,
    path = "/get_claim/{claim_id}",
    tag = "claims",
    params(
        ("claim_id" = String, Path, description = "Claim ID")
    ),
    responses(
        (status = 200, description = "Full claim record", body = GetClaimResponse),
        (status = 400, description = "Invalid claim ID", body = ErrorResponse),
        (status = 404, description = "Claim not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_claim"))]
pub async fn get_claim(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<GetClaimResponse>, HttpAppError> {
    let Path(claim_id) = path?;
    let claim_data = state
        .claims
        .load(&claim_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Claim not found".to_string()))?;

    Ok(Json(GetClaimResponse {
        success: true,
        claim_data,
    }))
}
