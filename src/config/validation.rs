//! Response script validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject conflicting sources for the status line and the body
//! - Validate value ranges (chunk size and bandwidth > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ResponseScript → Result<(), Vec<ValidationError>>
//! - Status codes are not checked; scripts may send anything on purpose

use thiserror::Error;

use crate::config::schema::ResponseScript;

/// A semantic problem in a response script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("`code` and `status` are mutually exclusive")]
    ConflictingStatus,

    #[error("`body` and `body_file` are mutually exclusive")]
    ConflictingBody,

    #[error("`chunk_size` requires an inline `body`")]
    ChunkedFile,

    #[error("`chunk_size` must be greater than zero")]
    ZeroChunkSize,

    #[error("`bytes_per_second` must be greater than zero")]
    ZeroBandwidth,

    #[error("`body` must be ASCII")]
    NonAsciiBody,
}

/// Check a parsed script before it is built.
pub fn validate_script(script: &ResponseScript) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if script.code.is_some() && script.status.is_some() {
        errors.push(ValidationError::ConflictingStatus);
    }
    if script.body.is_some() && script.body_file.is_some() {
        errors.push(ValidationError::ConflictingBody);
    }
    if script.chunk_size.is_some() && script.body_file.is_some() {
        errors.push(ValidationError::ChunkedFile);
    }
    if script.chunk_size == Some(0) {
        errors.push(ValidationError::ZeroChunkSize);
    }
    if script.bytes_per_second == Some(0) {
        errors.push(ValidationError::ZeroBandwidth);
    }
    if script.body.as_deref().is_some_and(|body| !body.is_ascii()) {
        errors.push(ValidationError::NonAsciiBody);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
