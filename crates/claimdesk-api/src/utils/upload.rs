//! Multipart collection for claim submissions
//!
//! The whole form is buffered before anything is validated or written, so a
//! rejected submission leaves no files behind.

use axum::extract::Multipart;
use bytes::Bytes;
use claimdesk_core::validation::validate_claim_id;
use claimdesk_core::AppError;

use crate::error::HttpAppError;

pub const FIELD_CLAIM_ID: &str = "claimId";
pub const FIELD_CLAIM_AMOUNT: &str = "claimAmount";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_DOCUMENT: &str = "pdfDocument";
pub const FIELD_IMAGES: &str = "imageEvidence";

/// One uploaded file part, fully buffered.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied filename; empty when the part carried none
    pub filename: String,
    pub data: Bytes,
}

/// Raw claim form as received. Text fields keep their first occurrence.
#[derive(Debug, Default)]
pub struct ClaimForm {
    pub claim_id: Option<String>,
    pub claim_amount: Option<String>,
    pub description: Option<String>,
    pub document: Option<UploadedFile>,
    pub images: Vec<UploadedFile>,
}

/// A form that passed validation and may be persisted.
#[derive(Debug)]
pub struct ClaimSubmission {
    pub claim_id: String,
    pub claim_amount: f64,
    pub description: String,
    pub document: Option<UploadedFile>,
    pub images: Vec<UploadedFile>,
}

/// Read every multipart field into a `ClaimForm`.
///
/// Only the first `pdfDocument` part is kept; unknown fields are ignored.
pub async fn collect_claim_form(mut multipart: Multipart) -> Result<ClaimForm, HttpAppError> {
    let mut form = ClaimForm::default();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            FIELD_CLAIM_ID | FIELD_CLAIM_AMOUNT | FIELD_DESCRIPTION => {
                let value = field.text().await?;
                let slot = match field_name.as_str() {
                    FIELD_CLAIM_ID => &mut form.claim_id,
                    FIELD_CLAIM_AMOUNT => &mut form.claim_amount,
                    _ => &mut form.description,
                };
                if slot.is_none() {
                    *slot = Some(value);
                }
            }
            FIELD_DOCUMENT | FIELD_IMAGES => {
                let filename = field.file_name().map(|s| s.to_string()).unwrap_or_default();
                let data = field.bytes().await?;
                let file = UploadedFile { filename, data };

                if field_name == FIELD_IMAGES {
                    form.images.push(file);
                } else if form.document.is_none() {
                    form.document = Some(file);
                } else {
                    tracing::debug!(filename = %file.filename, "Ignoring additional pdfDocument part");
                }
            }
            _ => {
                tracing::debug!(field = %field_name, "Ignoring unknown multipart field");
            }
        }
    }

    Ok(form)
}

impl ClaimForm {
    /// Check required fields, the amount and the claim id, in that order.
    pub fn validate(self) -> Result<ClaimSubmission, AppError> {
        let (claim_id, claim_amount, description) = match (
            non_empty(self.claim_id),
            non_empty(self.claim_amount),
            non_empty(self.description),
        ) {
            (Some(id), Some(amount), Some(description)) => (id, amount, description),
            _ => return Err(AppError::InvalidInput("Missing required fields".to_string())),
        };

        let claim_amount = parse_claim_amount(&claim_amount)?;
        validate_claim_id(&claim_id)?;

        Ok(ClaimSubmission {
            claim_id,
            claim_amount,
            description,
            document: self.document,
            images: self.images,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse a submitted amount. Surrounding whitespace is ignored; NaN and
/// infinities are rejected because they cannot be stored as JSON numbers.
pub fn parse_claim_amount(raw: &str) -> Result<f64, AppError> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("Invalid claim amount: '{}'", raw)))?;

    if !amount.is_finite() {
        return Err(AppError::InvalidInput(format!(
            "Invalid claim amount: '{}'",
            raw
        )));
    }

    Ok(amount)
}
