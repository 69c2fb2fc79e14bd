//! Claimdesk Storage Library
//!
//! This crate owns the on-disk tree of uploaded claim attachments. It provides
//! the `AttachmentStore` trait and a local filesystem implementation.
//!
//! # Layout
//!
//! - **Documents**: `{upload_root}/pdfs/{saved_name}`
//! - **Images**: `{upload_root}/images/{saved_name}`
//!
//! Saved names are generated as `{claim_id}_{8 hex}.{ext}` by the `keys`
//! module and must be flat: no separators, no `..`, no leading dot.

pub mod factory;
pub(crate) mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use factory::{create_attachment_store, FileStoreConfig};
pub use local::LocalAttachmentStore;
pub use traits::{AttachmentStore, ByteStream, StorageError, StorageResult};
