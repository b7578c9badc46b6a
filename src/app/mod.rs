//! Main application modules.
//!
//! This module provides URL normalization and parsing used by the analysis
//! pipeline.

pub mod url;

// Re-export public API
pub use url::{normalize_url, parse_url};
