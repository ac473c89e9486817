use anyhow::Result;
use std::time::Duration;

use tracing::{info, warn};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use super::{log_requests, state::*, ServerConfig};
use crate::chat::{ChatRequest, ChatService};
use crate::tools::tool_definitions;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
    uptime: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    records_loaded: Option<usize>,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn health(State(state): State<ServerState>) -> impl IntoResponse {
    let records_loaded = state
        .chat_service
        .store()
        .loaded()
        .map(|collection| collection.len());
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime: format_uptime(state.start_time.elapsed()),
        records_loaded,
    })
}

async fn list_tools() -> impl IntoResponse {
    Json(tool_definitions())
}

async fn chat(
    State(chat_service): State<GuardedChatService>,
    request: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let request = match request {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let request_id = uuid::Uuid::new_v4().to_string();
            warn!("[{}] Rejected chat body: {}", request_id, rejection.body_text());
            return (
                rejection.status(),
                Json(json!({
                    "error": "Invalid request body",
                    "requestId": request_id,
                })),
            )
                .into_response();
        }
    };
    match chat_service.handle_chat(&request).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "error": "Collection unavailable",
                "requestId": err.request_id,
            })),
        )
            .into_response(),
    }
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"}))).into_response()
}

fn make_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn make_app(config: ServerConfig, chat_service: GuardedChatService) -> Router {
    let state = ServerState::new(config, chat_service);

    Router::new()
        .route("/chat", post(chat))
        .route("/tools", get(list_tools))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(make_cors_layer())
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state)
}

pub async fn run_server(config: ServerConfig, chat_service: ChatService) -> Result<()> {
    let port = config.port;
    let app = make_app(config, std::sync::Arc::new(chat_service));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Serving on http://{}", listener.local_addr()?);

    Ok(axum::serve(listener, app).await?)
}
