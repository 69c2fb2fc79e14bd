//! Saved-name generation for stored attachments.
//!
//! Format: `{claim_id}_{suffix}.{extension}` where the suffix is the first 8 hex
//! characters of a random v4 UUID. Collisions are not detected.

use uuid::Uuid;

/// Length of the random hex suffix
pub const SUFFIX_LEN: usize = 8;

/// Generate the on-disk name for an attachment of `claim_id`.
pub fn generate_saved_name(claim_id: &str, extension: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}_{}.{}",
        claim_id,
        &suffix[..SUFFIX_LEN],
        extension.to_lowercase()
    )
}
