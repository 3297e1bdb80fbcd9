//! Unified error types for odtext.
//!
//! This module provides a single error type covering container access,
//! XML parsing and the structural faults found while walking ODT markup.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Error, Result};
