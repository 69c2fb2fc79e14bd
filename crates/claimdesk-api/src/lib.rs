//! Claimdesk API Library
//!
//! This crate provides the HTTP handlers, application setup and telemetry for
//! the claim intake service.

// Module declarations
mod api_doc;
mod handlers;
pub mod setup;
pub mod telemetry;
mod utils;

// Public modules
pub mod error;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
pub use state::AppState;
