//! OpenAPI documentation, served at `/api/openapi.json` and rendered at `/docs`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use claimdesk_core::models;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Claimdesk API",
        version = "0.1.0",
        description = "Insurance claim intake: submit a claim with a supporting PDF and photo evidence, fetch or list stored claims, and download their attachments."
    ),
    paths(
        handlers::claim_submit::submit_claim,
        handlers::claim_get::get_claim,
        handlers::claim_list::list_claims,
        handlers::attachment_download::download_file,
    ),
    components(
        schemas(
            // Core models
            models::ClaimRecord,
            models::ClaimSummary,
            models::AttachmentReference,
            models::AttachmentKind,
            // Responses
            handlers::claim_submit::SubmitClaimResponse,
            handlers::claim_get::GetClaimResponse,
            handlers::claim_list::ListClaimsResponse,
            // Error
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "claims", description = "Claim submission, retrieval, listing and attachment download")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_claim_routes() {
        let spec = get_openapi_spec();
        for path in [
            "/submit_claim",
            "/get_claim/{claim_id}",
            "/list_claims",
            "/download_file/{claim_id}/{filename}",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
