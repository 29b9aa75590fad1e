//! Unified error types for the Longan library.
//!
//! Only structural contract violations surface here; every per-region
//! condition an export can recover from is reported as a
//! [`Signal`](crate::common::report::Signal) instead.
use thiserror::Error;

/// Main error type for Longan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Rendered field markup could not be parsed
    #[error("XML error: {0}")]
    Xml(String),

    /// The template model does not satisfy the pre-formatted slot contract
    #[error("Malformed template: {0}")]
    MalformedTemplate(String),

    /// A sectioned field does not carry the expected header/body child blocks
    #[error("Section layout mismatch: expected {expected} child blocks, got {got}")]
    SectionMismatch { expected: usize, got: usize },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for Longan operations.
pub type Result<T> = std::result::Result<T, Error>;
