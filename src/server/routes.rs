//! HTTP route handlers for the insurance agent API.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::conversation::{Message, Role, ThreadId};

use super::errors::ApiError;
use super::state::{AppState, SERVICE_NAME};

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/chat", post(chat))
        .route("/history/{thread_id}", get(history))
        .with_state(state)
}

/// Service description and endpoint map.
async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": "SegurosVida+ API",
        "status": "active",
        "description": "Asistente virtual de seguros con memoria conversacional",
        "endpoints": {
            "chat": "/chat",
            "history": "/history/{thread_id}",
            "health": "/health"
        }
    }))
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `healthy` while the process serves requests.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Whether the agent is constructed and able to take turns.
    pub agent_ready: bool,
    /// Completion model answering turns.
    pub model: String,
    /// Crate version.
    pub version: &'static str,
}

/// Liveness and readiness check.
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        agent_ready: state.agent_ready(),
        model: state.agent.model_name().to_string(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Chat request.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
    /// Conversation to continue; `default` when absent.
    #[serde(default)]
    pub thread_id: Option<String>,
}

/// Chat response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The assistant's reply.
    pub response: String,
    /// Thread the reply belongs to.
    pub thread_id: String,
}

/// Run one turn.
///
/// The turn runs on its own task: if the client goes away, the completion
/// call still finishes or times out, and the thread lock is released.
async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))?;

    if request.message.trim().is_empty() {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "El mensaje no puede estar vacío",
        ));
    }

    let thread_id = ThreadId::new(request.thread_id.unwrap_or_default());
    let agent = Arc::clone(&state.agent);
    let turn = tokio::spawn(async move { agent.handle_turn(&thread_id, &request.message).await });

    let reply = turn
        .await
        .map_err(|err| {
            error!("chat task failed: {err}");
            ApiError::internal("Error al procesar mensaje: tarea interrumpida")
        })??;

    Ok(Json(ChatResponse {
        response: reply.response,
        thread_id: reply.thread_id.into_inner(),
    }))
}

/// One history entry in the wire format used by the chat clients.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    /// `human` or `ai`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Message text.
    pub content: String,
}

impl From<Message> for HistoryEntry {
    fn from(message: Message) -> Self {
        let kind = match message.role {
            Role::User => "human",
            Role::Assistant => "ai",
            Role::System => "system",
        };
        Self {
            kind: kind.to_string(),
            content: message.content,
        }
    }
}

/// History response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Entries in chronological order.
    pub history: Vec<HistoryEntry>,
}

/// Read a thread's history. Unknown threads yield an empty list.
async fn history(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
) -> Json<HistoryResponse> {
    let thread_id = ThreadId::new(thread_id);
    let history = state
        .agent
        .get_history(&thread_id)
        .await
        .into_iter()
        .map(HistoryEntry::from)
        .collect();
    Json(HistoryResponse { history })
}
