use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::attachment::AttachmentReference;

/// One insurance claim submission, persisted as a single JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClaimRecord {
    pub claim_id: String,
    pub claim_amount: f64,
    pub description: String,
    /// Upload order: the optional document first, then images
    pub uploaded_files: Vec<AttachmentReference>,
    /// Fixed-width RFC 3339 UTC timestamp; sorts lexically in time order
    pub submission_time: String,
}

impl ClaimRecord {
    pub fn new(
        claim_id: String,
        claim_amount: f64,
        description: String,
        uploaded_files: Vec<AttachmentReference>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        ClaimRecord {
            claim_id,
            claim_amount,
            description,
            uploaded_files,
            submission_time: submission_timestamp(submitted_at),
        }
    }
}

/// Listing projection of a claim record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClaimSummary {
    pub claim_id: String,
    pub claim_amount: f64,
    pub submission_time: String,
    pub files_count: usize,
}

impl From<&ClaimRecord> for ClaimSummary {
    fn from(record: &ClaimRecord) -> Self {
        ClaimSummary {
            claim_id: record.claim_id.clone(),
            claim_amount: record.claim_amount,
            submission_time: record.submission_time.clone(),
            files_count: record.uploaded_files.len(),
        }
    }
}

/// Render a submission time as `YYYY-MM-DDTHH:MM:SS.ffffffZ`.
pub fn submission_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
