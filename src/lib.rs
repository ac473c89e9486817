//! Vinyl collection chat server library
//!
//! A deterministic intent router in front of an in-memory query engine over
//! a Discogs collection export, plus the HTTP surface that serves it.

pub mod chat;
pub mod collection;
pub mod config;
pub mod router;
pub mod server;
pub mod tools;

// Re-export commonly used types for convenience
pub use chat::{ChatRequest, ChatResponse, ChatService};
pub use collection::{Collection, CollectionError, CollectionStore, Record};
pub use router::{DeterministicRouter, Intent, RoutingDecision};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
pub use tools::{ToolCall, ToolError};
