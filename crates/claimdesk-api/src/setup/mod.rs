//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use claimdesk_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(config.is_production());
    crate::error::set_production_mode(config.is_production());

    tracing::info!(
        environment = %config.environment,
        "Configuration loaded and validated successfully"
    );

    let (store, claims) = storage::setup_storage(&config).await?;
    let state = Arc::new(AppState::new(config.clone(), store, claims));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
