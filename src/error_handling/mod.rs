//! Error handling.
//!
//! This module defines the error types used throughout the application.

mod types;

// Re-export public API
pub use types::{AnalysisError, InitializationError};
