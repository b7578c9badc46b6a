//! URL feature extraction.
//!
//! This module implements the analysis pipeline: normalize the raw input,
//! parse it, then derive the four attribute groups (basic info, components,
//! domain breakdown, security heuristics). Each extractor is a pure function
//! of the parsed URL.

mod basic;
mod components;
mod domain;
mod report;
mod security;

// Re-export public API
pub use report::{AnalysisReport, Attribute, AttributeGroup, GroupKind, ValueStatus};

use log::debug;

use crate::app::{normalize_url, parse_url};
use crate::error_handling::AnalysisError;

/// Runs the full analysis pipeline on a raw URL string.
///
/// Normalizes the input (trim, add an `https://` prefix when no recognized
/// scheme is present), parses it, and computes the four attribute groups.
/// The whole computation is a pure function of the input string.
///
/// # Arguments
///
/// * `raw` - The URL string as supplied by the user
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyInput`] for empty/whitespace input and
/// [`AnalysisError::InvalidUrl`] when the normalized string fails URL syntax
/// validation. No partial report is produced on failure.
///
/// # Example
///
/// ```
/// use url_inspector::{analyze, GroupKind};
///
/// let report = analyze("localhost:8080/a/b").unwrap();
/// assert_eq!(report.value(GroupKind::Domain, "Is Local"), Some("Yes"));
/// assert_eq!(report.value(GroupKind::Components, "Path Depth"), Some("2 levels"));
/// ```
pub fn analyze(raw: &str) -> Result<AnalysisReport, AnalysisError> {
    let normalized = normalize_url(raw)?;
    let url = parse_url(&normalized)?;
    debug!("Analyzing {url}");

    Ok(AnalysisReport {
        normalized,
        groups: vec![
            basic::extract(&url),
            components::extract(&url),
            domain::extract(&url),
            security::extract(&url),
        ],
    })
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
