use super::Intent;
use crate::tools::ToolCall;
use serde_json::Value;

pub const FALLBACK_TEXT: &str = "I'm not sure what you're looking for. Here are some example queries:\n\n\
• \"What records do I have by Grimes?\"\n\
• \"Do I have anything on 4AD?\"\n\
• \"Show me records from 2016\"\n\
• \"Records between 2010 and 2020\"\n\
• \"Give me a quick stats summary\"\n\
• \"List some artists\"\n\
• \"Search for electronic\"";

/// Outcome of routing one message.
#[derive(Debug, Clone, PartialEq)]
pub enum RoutingDecision {
    Resolved {
        intent: Intent,
        call: ToolCall,
        confidence: f64,
    },
    Fallback {
        text: String,
    },
}

impl RoutingDecision {
    pub fn resolved(intent: Intent, call: ToolCall) -> Self {
        RoutingDecision::Resolved {
            intent,
            call,
            confidence: intent.confidence(),
        }
    }

    pub fn fallback() -> Self {
        RoutingDecision::Fallback {
            text: FALLBACK_TEXT.to_string(),
        }
    }

    pub fn intent(&self) -> Intent {
        match self {
            RoutingDecision::Resolved { intent, .. } => *intent,
            RoutingDecision::Fallback { .. } => Intent::Unknown,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            RoutingDecision::Resolved { confidence, .. } => *confidence,
            RoutingDecision::Fallback { .. } => Intent::Unknown.confidence(),
        }
    }

    pub fn tool_call(&self) -> Option<&ToolCall> {
        match self {
            RoutingDecision::Resolved { call, .. } => Some(call),
            RoutingDecision::Fallback { .. } => None,
        }
    }

    pub fn tool_name(&self) -> Option<&'static str> {
        self.tool_call().map(ToolCall::name)
    }

    pub fn tool_args(&self) -> Option<Value> {
        self.tool_call().map(ToolCall::arguments)
    }

    pub fn fallback_text(&self) -> Option<&str> {
        match self {
            RoutingDecision::Resolved { .. } => None,
            RoutingDecision::Fallback { text } => Some(text),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RoutingDecision::Fallback { .. })
    }
}
