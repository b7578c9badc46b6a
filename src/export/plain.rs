//! Plain-text rendering with status-colored values.

use colored::*;

use crate::analysis::{AnalysisReport, ValueStatus};

/// Renders the four attribute groups as label/value rows.
///
/// Each group is printed under its heading; values carrying a status tag are
/// colored green (good), yellow (warning), or red (bad).
pub fn render_plain(report: &AnalysisReport) -> String {
    let blocks: Vec<String> = report
        .groups
        .iter()
        .map(|group| {
            let mut block = format!("{}\n", group.kind.title().bold());
            for entry in &group.entries {
                let value = match entry.status {
                    Some(ValueStatus::Good) => entry.value.green().to_string(),
                    Some(ValueStatus::Warning) => entry.value.yellow().to_string(),
                    Some(ValueStatus::Bad) => entry.value.red().to_string(),
                    None => entry.value.clone(),
                };
                block.push_str(&format!("  {:<15}{}\n", format!("{}:", entry.label), value));
            }
            block
        })
        .collect();

    blocks.join("\n").trim_end().to_string()
}
