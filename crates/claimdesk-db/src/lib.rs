//! Claim record persistence
//!
//! Each claim is stored as one pretty-printed JSON document named
//! `<claim_id>.json` inside the configured claims directory.

pub mod db;

pub use db::{ClaimRepository, RepositoryError, RepositoryResult};
