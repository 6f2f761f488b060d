use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Failure taxonomy for the career pipeline:
/// - `Validation`: bad input, rejected before any external call.
/// - `InvalidQuery`: Course Finder called with an empty skill/goal — a
///   contract violation that should not occur given correct analyzer output.
/// - `AnalysisParse`: the generation capability returned text that is empty
///   or fails schema validation. Fatal to the request, never blind-retried.
/// - `RoadmapGeneration`: the composer call failed. Distinct from
///   `AnalysisParse` so callers can tell "could not analyze" from
///   "could not build roadmap".
///
/// Degraded course lookups are NOT an error — they are absorbed into
/// fallback content and only logged.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Analysis parse error: {0}")]
    AnalysisParse(String),

    #[error("Roadmap generation error: {0}")]
    RoadmapGeneration(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidQuery(msg) => {
                tracing::error!("Invalid course query: {msg}");
                (StatusCode::BAD_REQUEST, "INVALID_QUERY", msg.clone())
            }
            AppError::AnalysisParse(msg) => {
                tracing::error!("Analysis parse error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "ANALYSIS_PARSE_ERROR",
                    "Could not analyze the resume against the career goal".to_string(),
                )
            }
            AppError::RoadmapGeneration(msg) => {
                tracing::error!("Roadmap generation error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "ROADMAP_ERROR",
                    "Could not build a learning roadmap".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
