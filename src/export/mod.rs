//! Report rendering.
//!
//! One submodule per output format, both consuming the same
//! [`AnalysisReport`]:
//! - `plain`: grouped label/value rows with status-colored values
//! - `json`: a single JSON document for programmatic processing

mod json;
mod plain;

// Re-export public API
pub use json::render_json;
pub use plain::render_plain;

use crate::analysis::AnalysisReport;
use crate::config::OutputFormat;

/// Renders a report in the requested output format.
pub fn render(report: &AnalysisReport, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Plain => render_plain(report),
        OutputFormat::Json => render_json(report),
    }
}
