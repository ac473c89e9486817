use axum::extract::FromRef;

use crate::chat::ChatService;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedChatService = Arc<ChatService>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub chat_service: GuardedChatService,
}

impl ServerState {
    pub fn new(config: ServerConfig, chat_service: GuardedChatService) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            chat_service,
        }
    }
}

impl FromRef<ServerState> for GuardedChatService {
    fn from_ref(input: &ServerState) -> Self {
        input.chat_service.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
