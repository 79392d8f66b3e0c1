//! Per-run summary of an embed, for the JSON output format.

use serde::Serialize;

/// Summary of one embed run.
#[derive(Debug, Serialize)]
pub struct EmbedReport {
    /// Source (HTML) file path as given on the command line.
    pub source: String,
    /// Target (C++) file path as given on the command line.
    pub target: String,
    /// Number of source lines embedded into the literal.
    pub lines_embedded: usize,
    /// Number of `//` comment lines dropped.
    pub comments_skipped: usize,
    /// Byte length of the generated declaration.
    pub literal_bytes: usize,
    /// Whether the anchor pattern was found and replaced in the target.
    pub anchor_replaced: bool,
}

impl EmbedReport {
    /// Format as JSON for programmatic consumption.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
