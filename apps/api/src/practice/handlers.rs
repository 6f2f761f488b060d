//! Axum route handlers for the practice-paper API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::practice::{generate_paper, PracticePaper, PracticeRequest};
use crate::state::AppState;

/// POST /api/v1/practice/generate
pub async fn handle_generate_paper(
    State(state): State<AppState>,
    Json(request): Json<PracticeRequest>,
) -> Result<Json<PracticePaper>, AppError> {
    let paper = generate_paper(state.llm.clone(), &request).await?;
    Ok(Json(paper))
}
