//! Validation modules

pub mod identifier;

pub use identifier::{
    file_extension, validate_claim_id, validate_flat_filename, FilenameError,
    MAX_CLAIM_ID_LENGTH,
};
