mod chat_models;
mod service;

pub use chat_models::{ChatMode, ChatRequest, ChatResponse};
pub use service::{
    ChatError, ChatService, InvokeError, MESSAGE_REQUIRED_ANSWER, QUERY_FAILED_ANSWER,
};
