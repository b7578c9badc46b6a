//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default ports, local hostname rules)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{LogFormat, LogLevel, Opt, OutputFormat};
