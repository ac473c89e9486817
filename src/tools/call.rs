//! Typed tool invocations.

use super::ToolError;
use crate::collection::QueryType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const QUERY_COLLECTION_TOOL: &str = "query_vinyl_collection";
pub const FILTER_RECORDS_TOOL: &str = "filter_records";
pub const STATS_SUMMARY_TOOL: &str = "stats_summary";
pub const LIST_ARTISTS_TOOL: &str = "list_artists";

pub const DEFAULT_QUERY_LIMIT: i64 = 10;
pub const DEFAULT_ARTISTS_LIMIT: i64 = 25;

fn default_query_limit() -> i64 {
    DEFAULT_QUERY_LIMIT
}

fn default_artists_limit() -> i64 {
    DEFAULT_ARTISTS_LIMIT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryArgs {
    pub query_type: QueryType,
    pub search_term: String,
    #[serde(default = "default_query_limit")]
    pub limit: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_from: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_to: Option<i32>,
    #[serde(default = "default_query_limit")]
    pub limit: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListArtistsArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_with: Option<String>,
    #[serde(default = "default_artists_limit")]
    pub limit: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct NoArgs {}

/// One collection operation together with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    QueryCollection(QueryArgs),
    FilterRecords(FilterArgs),
    StatsSummary,
    ListArtists(ListArtistsArgs),
}

impl ToolCall {
    pub fn query(query_type: QueryType, search_term: impl Into<String>) -> ToolCall {
        ToolCall::QueryCollection(QueryArgs {
            query_type,
            search_term: search_term.into(),
            limit: DEFAULT_QUERY_LIMIT,
        })
    }

    pub fn year_range(year_from: i32, year_to: i32) -> ToolCall {
        ToolCall::FilterRecords(FilterArgs {
            artist: None,
            label: None,
            year_from: Some(year_from),
            year_to: Some(year_to),
            limit: DEFAULT_QUERY_LIMIT,
        })
    }

    pub fn list_artists() -> ToolCall {
        ToolCall::ListArtists(ListArtistsArgs {
            starts_with: None,
            limit: DEFAULT_ARTISTS_LIMIT,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolCall::QueryCollection(_) => QUERY_COLLECTION_TOOL,
            ToolCall::FilterRecords(_) => FILTER_RECORDS_TOOL,
            ToolCall::StatsSummary => STATS_SUMMARY_TOOL,
            ToolCall::ListArtists(_) => LIST_ARTISTS_TOOL,
        }
    }

    /// The JSON argument object, in the shape `from_invocation` accepts.
    pub fn arguments(&self) -> Value {
        let value = match self {
            ToolCall::QueryCollection(args) => serde_json::to_value(args),
            ToolCall::FilterRecords(args) => serde_json::to_value(args),
            ToolCall::StatsSummary => serde_json::to_value(NoArgs {}),
            ToolCall::ListArtists(args) => serde_json::to_value(args),
        };
        // Plain structs of strings and integers always serialize.
        value.unwrap_or_else(|_| Value::Object(Default::default()))
    }

    /// Build a call from a tool name and its JSON arguments.
    ///
    /// Unknown tools, unknown keys and missing required keys are rejected.
    pub fn from_invocation(name: &str, arguments: Value) -> Result<ToolCall, ToolError> {
        let arguments = match arguments {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };
        let invalid = |err: serde_json::Error| ToolError::InvalidArguments(format!("{}: {}", name, err));

        match name {
            QUERY_COLLECTION_TOOL => serde_json::from_value(arguments)
                .map(ToolCall::QueryCollection)
                .map_err(invalid),
            FILTER_RECORDS_TOOL => serde_json::from_value(arguments)
                .map(ToolCall::FilterRecords)
                .map_err(invalid),
            STATS_SUMMARY_TOOL => serde_json::from_value::<NoArgs>(arguments)
                .map(|_| ToolCall::StatsSummary)
                .map_err(invalid),
            LIST_ARTISTS_TOOL => serde_json::from_value(arguments)
                .map(ToolCall::ListArtists)
                .map_err(invalid),
            other => Err(ToolError::NotFound(other.to_string())),
        }
    }
}
