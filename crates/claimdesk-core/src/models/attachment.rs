use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::validation::file_extension;

/// Attachment category; decides which subdirectory of the upload tree holds the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Document,
    Image,
}

impl AttachmentKind {
    /// Subdirectory under the upload root.
    pub fn subdirectory(&self) -> &'static str {
        match self {
            AttachmentKind::Document => "pdfs",
            AttachmentKind::Image => "images",
        }
    }

    /// Infer the kind of a stored file from its name alone.
    ///
    /// `pdf` maps to documents and every other extension (or none) to images.
    /// Stored attachment references are not consulted.
    pub fn for_filename(filename: &str) -> Self {
        match file_extension(filename).as_deref() {
            Some("pdf") => AttachmentKind::Document,
            _ => AttachmentKind::Image,
        }
    }
}

impl FromStr for AttachmentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "document" | "pdf" => Ok(AttachmentKind::Document),
            "image" => Ok(AttachmentKind::Image),
            _ => Err(anyhow::anyhow!("Invalid attachment kind: {}", s)),
        }
    }
}

impl Display for AttachmentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AttachmentKind::Document => write!(f, "document"),
            AttachmentKind::Image => write!(f, "image"),
        }
    }
}

/// Metadata snapshot of one stored attachment, embedded in its claim record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttachmentReference {
    /// Name supplied by the uploading client (display only)
    pub original_name: String,
    /// Server-generated name: `<claim_id>_<8 hex>.<ext>`
    pub saved_name: String,
    pub file_path: String,
    pub file_type: AttachmentKind,
    /// Size in bytes measured from the stored file
    pub file_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_subdirectories() {
        assert_eq!(AttachmentKind::Document.subdirectory(), "pdfs");
        assert_eq!(AttachmentKind::Image.subdirectory(), "images");
    }

    #[test]
    fn test_kind_for_filename_routes_only_pdf_to_documents() {
        assert_eq!(
            AttachmentKind::for_filename("C100_0a1b2c3d.PDF"),
            AttachmentKind::Document
        );
        assert_eq!(
            AttachmentKind::for_filename("C100_0a1b2c3d.jpg"),
            AttachmentKind::Image
        );
        assert_eq!(
            AttachmentKind::for_filename("C100_0a1b2c3d.txt"),
            AttachmentKind::Image
        );
        assert_eq!(AttachmentKind::for_filename("noext"), AttachmentKind::Image);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&AttachmentKind::Document).unwrap();
        assert_eq!(json, "\"document\"");
        let kind: AttachmentKind = serde_json::from_str("\"image\"").unwrap();
        assert_eq!(kind, AttachmentKind::Image);
        assert_eq!("Document".parse::<AttachmentKind>().unwrap(), AttachmentKind::Document);
        assert!("video".parse::<AttachmentKind>().is_err());
    }
}
