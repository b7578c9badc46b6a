//! url_inspector library: URL feature extraction
//!
//! This library parses a user-supplied URL string and derives descriptive and
//! heuristic-security attributes about it: basic info (hostname, protocol,
//! port, path, query, fragment), structural components, a domain breakdown,
//! and a set of heuristic security flags. Everything is a pure function of
//! the input string; no network, file, or storage access is involved.
//!
//! # Example
//!
//! ```
//! use url_inspector::{analyze, GroupKind};
//!
//! let report = analyze("example.com").unwrap();
//! assert_eq!(report.value(GroupKind::Basic, "Website"), Some("example.com"));
//! assert_eq!(report.value(GroupKind::Basic, "Protocol"), Some("HTTPS"));
//! ```
//!
//! # Errors
//!
//! Analysis fails in exactly two ways: empty input and unparseable input.
//! Both surface as an [`AnalysisError`] whose `Display` string is the message
//! shown to the user.

#![warn(missing_docs)]

mod analysis;
mod app;
pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;

// Re-export public API
pub use analysis::{analyze, AnalysisReport, Attribute, AttributeGroup, GroupKind, ValueStatus};
pub use config::{LogFormat, LogLevel, Opt, OutputFormat};
pub use error_handling::AnalysisError;
