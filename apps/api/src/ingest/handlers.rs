//! Axum route handler for resume upload.

use axum::{extract::Multipart, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::ingest::extract_text;

#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub file_name: String,
    pub text: String,
    pub word_count: usize,
}

/// POST /api/v1/ingest/resume
///
/// Accepts a multipart upload with a `file` field and returns the extracted
/// text, ready to feed into the career-analysis endpoint.
pub async fn handle_ingest_resume(mut multipart: Multipart) -> Result<Json<IngestResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("file field has no filename".to_string()))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("could not read upload: {e}")))?;

        let text = extract_text(&file_name, &data)?;
        let word_count = text.split_whitespace().count();
        return Ok(Json(IngestResponse {
            file_name,
            text,
            word_count,
        }));
    }

    Err(AppError::Validation(
        "multipart body must contain a 'file' field".to_string(),
    ))
}
