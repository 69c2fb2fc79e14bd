use crate::{AttachmentStore, LocalAttachmentStore, StorageResult};
use claimdesk_core::models::AttachmentKind;
use claimdesk_core::Config;
use std::path::PathBuf;
use std::sync::Arc;

/// Settings for the attachment store, derived from `Config`.
#[derive(Clone, Debug)]
pub struct FileStoreConfig {
    pub upload_root: PathBuf,
    pub document_extensions: Vec<String>,
    pub image_extensions: Vec<String>,
}

impl FileStoreConfig {
    /// Whether `extension` (already lowercased) is accepted for `kind`.
    pub fn allows(&self, kind: AttachmentKind, extension: &str) -> bool {
        let allowed = match kind {
            AttachmentKind::Document => &self.document_extensions,
            AttachmentKind::Image => &self.image_extensions,
        };
        allowed.iter().any(|ext| ext == extension)
    }
}

impl From<&Config> for FileStoreConfig {
    fn from(config: &Config) -> Self {
        FileStoreConfig {
            upload_root: config.upload_folder.clone(),
            document_extensions: config.document_allowed_extensions.clone(),
            image_extensions: config.image_allowed_extensions.clone(),
        }
    }
}

/// Create the attachment store described by the configuration
pub async fn create_attachment_store(config: &Config) -> StorageResult<Arc<dyn AttachmentStore>> {
    let store = LocalAttachmentStore::new(FileStoreConfig::from(config)).await?;
    Ok(Arc::new(store))
}
