//! API routes

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::conversation::{Conversation, Message};
use crate::core::{Assessment, AssessmentEngine, ChatReply};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub engine: Arc<AssessmentEngine>,
}

impl AppState {
    pub fn new(config: Config, engine: AssessmentEngine) -> Self {
        Self {
            config,
            engine: Arc::new(engine),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Errors returned to API clients
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Message {index} is {length} characters, limit is {limit}")]
    MessageTooLong {
        index: usize,
        length: usize,
        limit: usize,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MessageTooLong { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl AssessRequest {
    fn validate(&self, limit: usize) -> Result<(), ApiError> {
        for (index, message) in self.messages.iter().enumerate() {
            message
                .validate_length(limit)
                .map_err(|length| ApiError::MessageTooLong {
                    index,
                    length,
                    limit,
                })?;
        }
        Ok(())
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn assess(
    State(state): State<AppState>,
    Json(request): Json<AssessRequest>,
) -> Result<Json<Assessment>, ApiError> {
    if let Err(e) = request.validate(state.config.max_message_chars) {
        tracing::info!("Rejected assess request: {}", e);
        return Err(e);
    }

    Ok(Json(state.engine.assess(&request.messages)))
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<AssessRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    if let Err(e) = request.validate(state.config.max_message_chars) {
        tracing::info!("Rejected chat request: {}", e);
        return Err(e);
    }

    let conversation = Conversation::from_messages(request.messages);
    Ok(Json(state.engine.reply(&conversation)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/v1/assess", post(assess))
        .route("/v1/chat", post(chat))
}
