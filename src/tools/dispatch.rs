use super::call::ToolCall;
use super::ToolError;
use crate::collection::{Collection, RecordFilter, StatsSummary};
use std::sync::Arc;
use tracing::debug;

pub const MIN_LIMIT: usize = 1;
pub const MAX_QUERY_LIMIT: usize = 50;
pub const MAX_ARTISTS_LIMIT: usize = 100;

/// Clamp a caller-supplied limit into `MIN_LIMIT..=max`.
pub fn clamp_limit(limit: i64, max: usize) -> usize {
    limit.clamp(MIN_LIMIT as i64, max as i64) as usize
}

/// What a tool produced, before rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Formatted records or artist names.
    Lines(Vec<String>),
    Stats(StatsSummary),
}

impl ToolOutput {
    /// Raw results as text, one entry per line or a single JSON document.
    pub fn result_strings(&self) -> Vec<String> {
        match self {
            ToolOutput::Lines(lines) => lines.clone(),
            ToolOutput::Stats(stats) => {
                vec![serde_json::to_string(stats).unwrap_or_else(|_| format!("{:?}", stats))]
            }
        }
    }
}

/// Run a call against a loaded collection.
pub fn execute(collection: &Collection, call: &ToolCall) -> ToolOutput {
    debug!("Executing {} with {}", call.name(), call.arguments());
    match call {
        ToolCall::QueryCollection(args) => {
            let limit = clamp_limit(args.limit, MAX_QUERY_LIMIT);
            let records = collection.query(args.query_type, &args.search_term, limit);
            ToolOutput::Lines(records.iter().map(|r| r.display_line()).collect())
        }
        ToolCall::FilterRecords(args) => {
            let limit = clamp_limit(args.limit, MAX_QUERY_LIMIT);
            let filter = RecordFilter {
                artist: args.artist.clone(),
                label: args.label.clone(),
                year_from: args.year_from,
                year_to: args.year_to,
            };
            let records = collection.filter_records(&filter, limit);
            ToolOutput::Lines(records.iter().map(|r| r.display_line()).collect())
        }
        ToolCall::StatsSummary => ToolOutput::Stats(collection.get_stats()),
        ToolCall::ListArtists(args) => {
            let limit = clamp_limit(args.limit, MAX_ARTISTS_LIMIT);
            ToolOutput::Lines(collection.get_artists(args.starts_with.as_deref(), limit))
        }
    }
}

/// Run a call on the blocking pool. A panic in the scan becomes
/// `ToolError::ExecutionFailed`.
pub async fn run(collection: Arc<Collection>, call: ToolCall) -> Result<ToolOutput, ToolError> {
    let tool_name = call.name();
    tokio::task::spawn_blocking(move || execute(&collection, &call))
        .await
        .map_err(|err| ToolError::ExecutionFailed(format!("{}: {}", tool_name, err)))
}
