//! Claimdesk Core Library
//!
//! This crate provides the claim domain models, error types, configuration and
//! identifier validation shared by the storage, repository and API crates.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorKind, ErrorMetadata, LogLevel};
