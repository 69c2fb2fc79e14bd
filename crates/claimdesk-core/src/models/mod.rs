//! Data models for the application
//!
//! Claim records and the attachment references embedded in them.

mod attachment;
mod claim;

pub use attachment::*;
pub use claim::*;
