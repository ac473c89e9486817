use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Requested routing mode. Only deterministic routing is available, any other
/// value is accepted and routed deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    #[default]
    Auto,
    #[serde(alias = "bedrock")]
    Llm,
    #[serde(other)]
    Deterministic,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub mode: ChatMode,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        ChatRequest {
            message: Some(message.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub answer: String,
    pub tool_used: bool,
    pub tool_name: Option<String>,
    pub tool_args: Option<Value>,
    pub tool_results: Option<Vec<String>>,
    pub request_id: String,
    pub model: Option<String>,
}

impl ChatResponse {
    /// An answer that involved no tool at all.
    pub fn text_only(request_id: String, answer: impl Into<String>) -> Self {
        ChatResponse {
            answer: answer.into(),
            tool_used: false,
            tool_name: None,
            tool_args: None,
            tool_results: None,
            request_id,
            model: None,
        }
    }
}
