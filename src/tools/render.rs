//! Text answers for tool outputs.

use super::dispatch::ToolOutput;
use crate::collection::StatsSummary;

const MAX_TOP_ENTRIES: usize = 5;

pub const NO_RESULTS: &str = "No results found.";

pub fn render_output(output: &ToolOutput) -> String {
    match output {
        ToolOutput::Lines(lines) => render_lines(lines),
        ToolOutput::Stats(stats) => render_stats(stats),
    }
}

pub fn render_lines(lines: &[String]) -> String {
    if lines.is_empty() {
        return NO_RESULTS.to_string();
    }
    format!("Found {} result(s):\n\n{}", lines.len(), lines.join("\n"))
}

pub fn render_stats(stats: &StatsSummary) -> String {
    let mut lines = vec![
        "📊 Collection Statistics:".to_string(),
        String::new(),
        format!("Total Records: {}", stats.total_records),
        format!("Unique Artists: {}", stats.unique_artists),
        format!("Unique Labels: {}", stats.unique_labels),
    ];

    if let (Some(min), Some(max)) = (stats.year_min, stats.year_max) {
        lines.push(format!("Year Range: {} - {}", min, max));
    }

    if !stats.top_artists.is_empty() {
        lines.push(String::new());
        lines.push("Top Artists:".to_string());
        for item in stats.top_artists.iter().take(MAX_TOP_ENTRIES) {
            lines.push(format!("  • {}: {} records", item.artist, item.count));
        }
    }

    if !stats.top_labels.is_empty() {
        lines.push(String::new());
        lines.push("Top Labels:".to_string());
        for item in stats.top_labels.iter().take(MAX_TOP_ENTRIES) {
            lines.push(format!("  • {}: {} records", item.label, item.count));
        }
    }

    lines.join("\n")
}
