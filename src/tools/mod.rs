//! Collection tools: typed calls, their definitions, execution and rendering.
//!
//! The router resolves a message into a `ToolCall`; name-based callers go
//! through `ToolCall::from_invocation` and end up with the same typed call.

mod call;
mod definitions;
mod dispatch;
mod render;

use thiserror::Error;

pub use call::{
    FilterArgs, ListArtistsArgs, QueryArgs, ToolCall, DEFAULT_ARTISTS_LIMIT, DEFAULT_QUERY_LIMIT,
    FILTER_RECORDS_TOOL, LIST_ARTISTS_TOOL, QUERY_COLLECTION_TOOL, STATS_SUMMARY_TOOL,
};
pub use definitions::{tool_definitions, ToolDefinition};
pub use dispatch::{
    clamp_limit, execute, run, ToolOutput, MAX_ARTISTS_LIMIT, MAX_QUERY_LIMIT, MIN_LIMIT,
};
pub use render::{render_lines, render_output, render_stats, NO_RESULTS};

/// Errors that can occur when invoking a tool.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}
