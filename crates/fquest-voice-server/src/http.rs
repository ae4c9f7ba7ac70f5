//! Router, shared state and the request-shape error surface.

use crate::openai::{ChatCompletionRequest, ChatCompletionResponse};
use crate::session::SessionIdentity;
use crate::turn::process_turn;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use fquest_interrupt::{AgentClient, InterruptRegistry, ResumeDispatcher};
use std::sync::Arc;

/// Voice webhook endpoint path.
pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
/// Liveness endpoint path.
pub const HEALTH_PATH: &str = "/healthz";

/// Model name echoed in completions when the request names none.
const DEFAULT_MODEL: &str = "quest-voice-bridge";

#[derive(Clone)]
pub struct AppState {
    pub agent: AgentClient,
    pub registry: Arc<dyn InterruptRegistry>,
    pub dispatcher: Arc<ResumeDispatcher>,
    /// Spoken on an empty first turn, when configured.
    pub greeting: Option<String>,
}

impl AppState {
    pub fn new(
        agent: AgentClient,
        registry: Arc<dyn InterruptRegistry>,
        greeting: Option<String>,
    ) -> Self {
        let dispatcher = Arc::new(ResumeDispatcher::new(agent.clone(), registry.clone()));
        Self {
            agent,
            registry,
            dispatcher,
            greeting,
        }
    }
}

/// Request-shape errors. Everything past the request shape is converted
/// into a spoken reply instead, so the webhook's only non-200 surface is a
/// malformed document.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Build the voice webhook routes.
pub fn voice_routes() -> Router<AppState> {
    Router::new().route(CHAT_COMPLETIONS_PATH, post(chat_completions))
}

/// Build the liveness routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route(HEALTH_PATH, get(healthz))
}

async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

async fn chat_completions(
    State(state): State<AppState>,
    Json(request): Json<ChatCompletionRequest>,
) -> Result<Json<ChatCompletionResponse>, ApiError> {
    if request.messages.is_empty() {
        return Err(ApiError::BadRequest("messages must not be empty".into()));
    }

    let model = request
        .model
        .clone()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let session = SessionIdentity::parse(request.custom_session_id.as_deref());

    let utterance = request.last_user_utterance().unwrap_or_default().trim();
    if utterance.is_empty() {
        if let Some(greeting) = &state.greeting {
            return Ok(Json(ChatCompletionResponse::assistant(model, greeting.clone())));
        }
        return Err(ApiError::BadRequest("no user utterance in messages".into()));
    }

    let reply = process_turn(&state, &session, utterance).await;
    Ok(Json(ChatCompletionResponse::assistant(model, reply)))
}
