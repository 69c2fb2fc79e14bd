use crate::factory::FileStoreConfig;
use crate::keys::generate_saved_name;
use crate::traits::{AttachmentStore, ByteStream, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use claimdesk_core::models::{AttachmentKind, AttachmentReference};
use claimdesk_core::validation::{file_extension, validate_flat_filename};
use futures::StreamExt;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem attachment store
#[derive(Clone, Debug)]
pub struct LocalAttachmentStore {
    config: FileStoreConfig,
}

impl LocalAttachmentStore {
    /// Create a new LocalAttachmentStore, creating `pdfs/` and `images/` under
    /// the upload root if they do not exist yet.
    pub async fn new(config: FileStoreConfig) -> StorageResult<Self> {
        for kind in [AttachmentKind::Document, AttachmentKind::Image] {
            let dir = config.upload_root.join(kind.subdirectory());
            fs::create_dir_all(&dir).await.map_err(|e| {
                StorageError::ConfigError(format!(
                    "Failed to create storage directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        Ok(LocalAttachmentStore { config })
    }

    /// Resolve a saved name inside the subdirectory for `kind`.
    ///
    /// Only flat names are accepted so a key can never leave its subdirectory.
    fn key_to_path(&self, kind: AttachmentKind, saved_name: &str) -> StorageResult<PathBuf> {
        let name = validate_flat_filename(saved_name)
            .map_err(|e| StorageError::InvalidKey(format!("{}: {}", saved_name, e)))?;

        Ok(self
            .config
            .upload_root
            .join(kind.subdirectory())
            .join(name))
    }
}

#[async_trait]
impl AttachmentStore for LocalAttachmentStore {
    async fn store(
        &self,
        kind: AttachmentKind,
        claim_id: &str,
        client_filename: &str,
        data: Bytes,
    ) -> StorageResult<Option<AttachmentReference>> {
        if client_filename.is_empty() {
            return Ok(None);
        }

        let extension = match file_extension(client_filename) {
            Some(ext) if self.config.allows(kind, &ext) => ext,
            other => {
                tracing::debug!(
                    claim_id = %claim_id,
                    filename = %client_filename,
                    extension = ?other,
                    kind = %kind,
                    "Skipping attachment with disallowed extension"
                );
                return Ok(None);
            }
        };

        let saved_name = generate_saved_name(claim_id, &extension);
        let path = self.key_to_path(kind, &saved_name)?;
        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        let file_size = fs::metadata(&path).await?.len();

        tracing::info!(
            path = %path.display(),
            claim_id = %claim_id,
            kind = %kind,
            size_bytes = file_size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Attachment stored"
        );

        Ok(Some(AttachmentReference {
            original_name: client_filename.to_string(),
            saved_name,
            file_path: path.display().to_string(),
            file_type: kind,
            file_size,
        }))
    }

    async fn open(&self, saved_name: &str) -> StorageResult<ByteStream> {
        let kind = AttachmentKind::for_filename(saved_name);
        let path = self.key_to_path(kind, saved_name)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(saved_name.to_string()));
        }

        let file = fs::File::open(&path).await.map_err(|e| {
            StorageError::DownloadFailed(format!("Failed to open file {}: {}", path.display(), e))
        })?;

        let path_display = path.display().to_string();
        let stream = tokio_util::io::ReaderStream::new(file).map(move |result| {
            result.map_err(|e| {
                tracing::error!(path = %path_display, error = %e, "Attachment stream read error");
                StorageError::DownloadFailed(format!("Failed to read chunk: {}", e))
            })
        });

        Ok(Box::pin(stream))
    }

    async fn exists(&self, saved_name: &str) -> StorageResult<bool> {
        let path = self.key_to_path(AttachmentKind::for_filename(saved_name), saved_name)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    async fn check_health(&self) -> StorageResult<()> {
        for kind in [AttachmentKind::Document, AttachmentKind::Image] {
            let dir = self.config.upload_root.join(kind.subdirectory());
            let meta = fs::metadata(&dir).await.map_err(|e| {
                StorageError::ConfigError(format!("{} is not accessible: {}", dir.display(), e))
            })?;
            if !meta.is_dir() {
                return Err(StorageError::ConfigError(format!(
                    "{} is not a directory",
                    dir.display()
                )));
            }
        }
        Ok(())
    }
}
