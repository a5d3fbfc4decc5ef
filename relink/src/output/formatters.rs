//! Output formatter implementations.

use crate::Result;

use super::{Direction, LinkReport, OutputFormatter};

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &LinkReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// Formatter for human-readable output.
///
/// Documents are listed in a left column padded to the longest path.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, report: &LinkReport) -> Result<String> {
        if report.is_empty() {
            return Ok("No documents matched.".to_string());
        }

        let heading = match report.direction {
            Direction::To => format!("Links to {}:", report.anchor),
            Direction::From => format!("Links from {}:", report.anchor),
        };

        let width = report
            .links
            .iter()
            .map(|entry| entry.document.len())
            .max()
            .unwrap_or(0);

        let mut lines = vec![heading];
        for entry in &report.links {
            lines.push(format!("  {:<width$}  {}", entry.document, entry.link));
        }

        Ok(lines.join("\n"))
    }
}
