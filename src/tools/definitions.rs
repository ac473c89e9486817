use super::call::{
    FILTER_RECORDS_TOOL, LIST_ARTISTS_TOOL, QUERY_COLLECTION_TOOL, STATS_SUMMARY_TOOL,
};
use super::dispatch::{MAX_ARTISTS_LIMIT, MAX_QUERY_LIMIT};
use serde::{Deserialize, Serialize};

/// Definition of a tool that a client can invoke.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Name of the tool (unique).
    pub name: String,
    /// Human-readable description of what the tool does.
    pub description: String,
    /// JSON Schema describing the tool's parameters.
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }

    /// Create a tool definition with no parameters.
    pub fn no_params(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(
            name,
            description,
            serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        )
    }
}

/// All tools exposed by the collection, in a stable order.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            QUERY_COLLECTION_TOOL,
            "Query the vinyl collection by artist, title, label, year, or across all text fields. \
             Matching is case-insensitive.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "query_type": {
                        "type": "string",
                        "enum": ["artist", "title", "label", "year", "all"],
                        "description": "Field to match against"
                    },
                    "search_term": {
                        "type": "string",
                        "description": "The term to search for (a 4-digit year for year queries)"
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of results (default 10)",
                        "minimum": 1,
                        "maximum": MAX_QUERY_LIMIT
                    }
                },
                "required": ["query_type", "search_term"],
                "additionalProperties": false
            }),
        ),
        ToolDefinition::new(
            FILTER_RECORDS_TOOL,
            "Filter records by artist, label and an inclusive release year range. \
             All criteria are optional and must all match.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "artist": {"type": "string", "description": "Artist name (partial match)"},
                    "label": {"type": "string", "description": "Label name (partial match)"},
                    "year_from": {"type": "integer", "description": "Minimum release year (inclusive)"},
                    "year_to": {"type": "integer", "description": "Maximum release year (inclusive)"},
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of results (default 10)",
                        "minimum": 1,
                        "maximum": MAX_QUERY_LIMIT
                    }
                },
                "required": [],
                "additionalProperties": false
            }),
        ),
        ToolDefinition::no_params(
            STATS_SUMMARY_TOOL,
            "Collection statistics: totals, unique artists and labels, year range, \
             top artists and top labels.",
        ),
        ToolDefinition::new(
            LIST_ARTISTS_TOOL,
            "List unique artists in the collection, sorted alphabetically.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "starts_with": {
                        "type": "string",
                        "description": "Only artists starting with this prefix (case-insensitive)"
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of artists (default 25)",
                        "minimum": 1,
                        "maximum": MAX_ARTISTS_LIMIT
                    }
                },
                "required": [],
                "additionalProperties": false
            }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definitions_cover_every_tool_once() {
        let definitions = tool_definitions();
        let names: Vec<&str> = definitions.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                QUERY_COLLECTION_TOOL,
                FILTER_RECORDS_TOOL,
                STATS_SUMMARY_TOOL,
                LIST_ARTISTS_TOOL
            ]
        );
        for definition in &definitions {
            assert!(!definition.description.is_empty());
            assert_eq!(definition.input_schema["type"], "object");
        }
    }

    #[test]
    fn serializes_input_schema_in_camel_case() {
        let json = serde_json::to_value(ToolDefinition::no_params("stats_summary", "stats")).unwrap();
        assert!(json.get("inputSchema").is_some());
        assert!(json.get("input_schema").is_none());
    }
}
