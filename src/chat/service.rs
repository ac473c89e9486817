use super::chat_models::{ChatMode, ChatRequest, ChatResponse};
use crate::collection::{CollectionError, CollectionStore};
use crate::router::{DeterministicRouter, RoutingDecision};
use crate::tools::{self, render_output, ToolCall, ToolError, ToolOutput};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

pub const MESSAGE_REQUIRED_ANSWER: &str = "Error: Message is required";
pub const QUERY_FAILED_ANSWER: &str =
    "I encountered an error while searching your collection. Please try rephrasing your query.";

/// The collection could not be loaded while answering a chat request.
#[derive(Debug, Error)]
#[error("Collection unavailable for request {request_id}: {source}")]
pub struct ChatError {
    pub request_id: String,
    #[source]
    pub source: CollectionError,
}

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error(transparent)]
    Tool(#[from] ToolError),
}

/// Process-wide chat context: the router and the collection it queries.
pub struct ChatService {
    router: DeterministicRouter,
    store: Arc<CollectionStore>,
}

impl ChatService {
    pub fn new(store: Arc<CollectionStore>) -> ChatService {
        ChatService::with_router(DeterministicRouter::new(), store)
    }

    pub fn with_router(router: DeterministicRouter, store: Arc<CollectionStore>) -> ChatService {
        ChatService { router, store }
    }

    pub fn store(&self) -> &Arc<CollectionStore> {
        &self.store
    }

    /// Answer one chat message.
    ///
    /// Only a collection that cannot be loaded is an error; tool failures are
    /// logged and answered with a generic apology.
    pub async fn handle_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let request_id = Uuid::new_v4().to_string();

        let message = match request.message.as_deref() {
            Some(message) if !message.is_empty() => message,
            _ => return Ok(ChatResponse::text_only(request_id, MESSAGE_REQUIRED_ANSWER)),
        };

        if request.mode == ChatMode::Llm {
            warn!(
                "[{}] LLM routing is not available, routing deterministically",
                request_id
            );
        }
        if let Some(session_id) = &request.session_id {
            debug!("[{}] Session {}", request_id, session_id);
        }

        let decision = self.router.route(message);
        let call = match decision {
            RoutingDecision::Fallback { text } => {
                info!("[{}] No intent recognized", request_id);
                return Ok(ChatResponse::text_only(request_id, text));
            }
            RoutingDecision::Resolved {
                intent,
                call,
                confidence,
            } => {
                info!(
                    "[{}] Intent {} ({:.2}) -> {} {}",
                    request_id,
                    intent,
                    confidence,
                    call.name(),
                    call.arguments()
                );
                call
            }
        };

        let collection = match self.store.collection().await {
            Ok(collection) => collection,
            Err(source) => {
                error!("[{}] Collection unavailable: {}", request_id, source);
                return Err(ChatError { request_id, source });
            }
        };

        let tool_name = call.name().to_string();
        let tool_args = call.arguments();
        let result = tools::run(collection, call).await;
        Ok(tool_response(request_id, tool_name, tool_args, result))
    }

    /// Invoke a tool by name with JSON arguments, bypassing the router.
    pub async fn invoke_tool(&self, name: &str, arguments: Value) -> Result<ToolOutput, InvokeError> {
        let call = ToolCall::from_invocation(name, arguments)?;
        let collection = self.store.collection().await?;
        Ok(tools::run(collection, call).await?)
    }
}

fn tool_response(
    request_id: String,
    tool_name: String,
    tool_args: Value,
    result: Result<ToolOutput, ToolError>,
) -> ChatResponse {
    match result {
        Ok(output) => ChatResponse {
            answer: render_output(&output),
            tool_used: true,
            tool_name: Some(tool_name),
            tool_args: Some(tool_args),
            tool_results: Some(output.result_strings()),
            request_id,
            model: None,
        },
        Err(err) => {
            error!("[{}] Tool {} failed: {}", request_id, tool_name, err);
            ChatResponse {
                answer: QUERY_FAILED_ANSWER.to_string(),
                tool_used: false,
                tool_name: Some(tool_name),
                tool_args: Some(tool_args),
                tool_results: None,
                request_id,
                model: None,
            }
        }
    }
}
