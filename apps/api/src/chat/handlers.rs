//! Axum route handlers for the tutoring chat API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::{ChatMessage, ChatSession, Role, SessionSummary};
use crate::errors::AppError;
use crate::llm_client::prompts::TUTOR_SYSTEM;
use crate::state::AppState;

/// How many trailing messages to replay into the model per turn.
const HISTORY_LIMIT: usize = 20;

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostMessageRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct PostMessageResponse {
    pub session_id: Uuid,
    pub reply: ChatMessage,
}

/// POST /api/v1/chat/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<ChatSession>, AppError> {
    let title = request
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| "New session".to_string());
    Ok(Json(state.sessions.create(title).await))
}

/// GET /api/v1/chat/sessions
pub async fn handle_list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionSummary>>, AppError> {
    Ok(Json(state.sessions.list().await))
}

/// GET /api/v1/chat/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChatSession>, AppError> {
    state
        .sessions
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("session {id}")))
}

/// POST /api/v1/chat/sessions/:id/messages
///
/// Appends the student's message, replays recent history to the tutor
/// model, and returns (and stores) the reply.
pub async fn handle_post_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<PostMessageRequest>,
) -> Result<Json<PostMessageResponse>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("session {id}")))?;

    let user_message = ChatMessage {
        role: Role::User,
        content: request.content,
        created_at: Utc::now(),
    };
    state.sessions.append(id, user_message.clone()).await;

    let prompt = build_chat_prompt(&session.messages, &user_message.content);
    let reply_text = state
        .llm
        .generate(&prompt, TUTOR_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("tutor reply failed: {e}")))?;

    let reply = ChatMessage {
        role: Role::Assistant,
        content: reply_text,
        created_at: Utc::now(),
    };
    state.sessions.append(id, reply.clone()).await;

    Ok(Json(PostMessageResponse {
        session_id: id,
        reply,
    }))
}

fn build_chat_prompt(history: &[ChatMessage], latest: &str) -> String {
    let mut prompt = String::new();
    let start = history.len().saturating_sub(HISTORY_LIMIT);
    for message in &history[start..] {
        let speaker = match message.role {
            Role::User => "Student",
            Role::Assistant => "Tutor",
        };
        prompt.push_str(&format!("{speaker}: {}\n", message.content));
    }
    prompt.push_str(&format!("Student: {latest}\nTutor:"));
    prompt
}
