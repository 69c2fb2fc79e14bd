//! Repositories for the data access layer
//
// Claim records (JSON documents on local disk)
pub mod claim;

pub use claim::{ClaimRepository, RepositoryError, RepositoryResult};
