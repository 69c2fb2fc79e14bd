//! Storage setup and initialization

use anyhow::{Context, Result};
use claimdesk_core::Config;
use claimdesk_db::ClaimRepository;
use claimdesk_storage::{create_attachment_store, AttachmentStore};
use std::sync::Arc;

/// Create the attachment store and claim repository, building their
/// directories if they do not exist yet.
pub async fn setup_storage(config: &Config) -> Result<(Arc<dyn AttachmentStore>, ClaimRepository)> {
    tracing::info!("Initializing attachment store...");
    let store = create_attachment_store(config)
        .await
        .context("Failed to initialize attachment store")?;

    let claims = ClaimRepository::new(config.claims_dir.clone())
        .await
        .context("Failed to initialize claim repository")?;

    tracing::info!(
        upload_folder = %config.upload_folder.display(),
        claims_dir = %config.claims_dir.display(),
        "Storage initialized successfully"
    );

    Ok((store, claims))
}
