//! Storage abstraction trait
//!
//! This module defines the AttachmentStore trait that attachment backends implement.

use async_trait::async_trait;
use bytes::Bytes;
use claimdesk_core::models::{AttachmentKind, AttachmentReference};
use futures::Stream;
use std::pin::Pin;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Chunked file content for streaming downloads
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, StorageError>> + Send>>;

/// Attachment storage abstraction
///
/// Binaries are segregated by `AttachmentKind`. The store owns the files; the
/// returned `AttachmentReference` is only a locator plus a metadata snapshot.
#[async_trait]
pub trait AttachmentStore: Send + Sync {
    /// Persist one uploaded file for `claim_id`.
    ///
    /// Returns `Ok(None)` when the filename is empty or its extension is not
    /// allowed for `kind`; nothing is written in that case and callers skip the
    /// file. On success the binary is synced to disk and `file_size` is read
    /// back from the stored file.
    async fn store(
        &self,
        kind: AttachmentKind,
        claim_id: &str,
        client_filename: &str,
        data: Bytes,
    ) -> StorageResult<Option<AttachmentReference>>;

    /// Open a stored file for streaming.
    ///
    /// The subdirectory is inferred from the name's extension (`pdf` →
    /// documents, anything else → images).
    async fn open(&self, saved_name: &str) -> StorageResult<ByteStream>;

    /// Check if a stored file exists
    async fn exists(&self, saved_name: &str) -> StorageResult<bool>;

    /// Verify the storage layout is in place
    async fn check_health(&self) -> StorageResult<()>;
}
