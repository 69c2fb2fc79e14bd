//! Shared application state.
//!
//! Every field is an immutable handle; handlers receive `Arc<AppState>`.

use claimdesk_core::Config;
use claimdesk_db::ClaimRepository;
use claimdesk_storage::AttachmentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Attachment binaries (`pdfs/` and `images/` under the upload root)
    pub store: Arc<dyn AttachmentStore>,
    /// Claim records (one JSON document per claim)
    pub claims: ClaimRepository,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn AttachmentStore>, claims: ClaimRepository) -> Self {
        Self {
            config,
            store,
            claims,
        }
    }
}
