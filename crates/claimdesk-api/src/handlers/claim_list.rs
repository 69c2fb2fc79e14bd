use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{extract::State, Json};
use claimdesk_core::models::ClaimSummary;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ListClaimsResponse {
    pub success: bool,
    /// Newest submission first
    pub claims: Vec<ClaimSummary>,
}

#[utoipa::path(
    get,
    path = "/list_claims",
    tag = "claims",
    responses(
        (status = 200, description = "Claim summaries, newest first", body = ListClaimsResponse),
        (status = 500, description = "A stored claim could not be read", body = ErrorResponse)
    )
)]
pub async fn list_claims(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListClaimsResponse>, HttpAppError> {
    let claims = state.claims.list_all().await?;

    Ok(Json(ListClaimsResponse {
        success: true,
        claims,
    }))
}
