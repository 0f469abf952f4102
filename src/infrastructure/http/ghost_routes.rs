//! Ghost chat API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::{GhostMessageRequestDto, GhostReplyDto};
use crate::application::services::{ChatSessionError, ChatTranscript, SubmitOutcome};
use crate::domain::value_objects::GhostSessionId;
use crate::infrastructure::state::AppState;

impl From<ChatSessionError> for (StatusCode, String) {
    fn from(error: ChatSessionError) -> Self {
        let status = match error {
            ChatSessionError::NotFound(_) => StatusCode::NOT_FOUND,
            ChatSessionError::Closed(_) => StatusCode::GONE,
            ChatSessionError::EmptyMessage => StatusCode::BAD_REQUEST,
        };
        (status, error.to_string())
    }
}

fn parse_session_id(id: &str) -> Result<GhostSessionId, (StatusCode, String)> {
    Uuid::parse_str(id)
        .map(GhostSessionId::from_uuid)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid session ID".to_string()))
}

/// One-shot reply with no transcript
pub async fn respond(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GhostMessageRequestDto>,
) -> Result<Json<GhostReplyDto>, (StatusCode, String)> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(ChatSessionError::EmptyMessage.into());
    }
    let text = state.ghost_service.respond(message).await;
    Ok(Json(GhostReplyDto::new(text)))
}

pub async fn open_session(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ChatTranscript>) {
    (StatusCode::CREATED, Json(state.chat_sessions.open().await))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ChatTranscript>, (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    Ok(Json(state.chat_sessions.get(id).await?))
}

pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<GhostMessageRequestDto>,
) -> Result<Json<SubmitOutcome>, (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    Ok(Json(state.chat_sessions.submit(id, &req.message).await?))
}

pub async fn close_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    state.chat_sessions.close(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
