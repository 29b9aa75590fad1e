//! Unified error types for the Longan library.
//!
//! This module provides a unified error type shared by the markup parser,
//! the converter, and the exporter, presenting a consistent API to users.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
