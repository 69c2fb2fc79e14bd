//! Identifier validation
//!
//! Claim identifiers and attachment filenames arrive from clients and end up
//! as path components, so both are checked before any path is built:
//! - Claim ids: ASCII letters, digits, `_` and `-`, at most 128 characters
//! - Filenames: a single flat component (no separators, no `..`, not hidden,
//!   no control characters)

use crate::error::AppError;

/// Maximum length of a claim identifier
pub const MAX_CLAIM_ID_LENGTH: usize = 128;

/// Validate a client-supplied claim identifier.
pub fn validate_claim_id(claim_id: &str) -> Result<(), AppError> {
    if claim_id.is_empty() {
        return Err(AppError::InvalidInput(
            "Claim ID cannot be empty".to_string(),
        ));
    }

    if claim_id.len() > MAX_CLAIM_ID_LENGTH {
        return Err(AppError::InvalidInput(format!(
            "Claim ID exceeds maximum length of {} characters",
            MAX_CLAIM_ID_LENGTH
        )));
    }

    if !claim_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AppError::InvalidInput(format!(
            "Claim ID '{}' contains invalid characters. Allowed: letters, digits, underscore (_), hyphen (-)",
            claim_id
        )));
    }

    Ok(())
}

/// Result of validating a flat filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FilenameError {
    #[error("Filename cannot be empty")]
    Empty,
    #[error("Invalid filename: path separators are not allowed")]
    ContainsPathSeparator,
    #[error("Invalid filename: '..' is not allowed")]
    PathTraversal,
    #[error("Invalid filename: hidden files are not allowed")]
    Hidden,
    #[error("Invalid filename: control characters are not allowed")]
    ControlCharacter,
}

/// Validate a flat filename (no directory components allowed).
pub fn validate_flat_filename(filename: &str) -> Result<&str, FilenameError> {
    if filename.is_empty() {
        return Err(FilenameError::Empty);
    }

    // Control characters would also allow header injection via Content-Disposition.
    if filename.chars().any(|c| c.is_control()) {
        return Err(FilenameError::ControlCharacter);
    }

    if filename.contains('/') || filename.contains('\\') {
        return Err(FilenameError::ContainsPathSeparator);
    }

    if filename.contains("..") {
        return Err(FilenameError::PathTraversal);
    }

    if filename.starts_with('.') {
        return Err(FilenameError::Hidden);
    }

    Ok(filename)
}

/// Lowercased text after the last dot, if any.
///
/// A bare `.pdf` counts as extension `pdf`.
pub fn file_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_lowercase())
}
