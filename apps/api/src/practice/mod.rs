//! Practice-paper generator — one strict-schema LLM call producing a list
//! of multiple-choice questions. Same parse-failure policy as the career
//! analyzer: an off-schema answer is a contract violation, not a retry.
//! PDF rendering is deliberately out of scope; the client formats the paper.

pub mod handlers;
pub mod prompts;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, TextGenerator};
use crate::practice::prompts::{PRACTICE_PROMPT_TEMPLATE, PRACTICE_SYSTEM};

const MAX_QUESTIONS: u32 = 25;

#[derive(Debug, Clone, Deserialize)]
pub struct PracticeRequest {
    pub subject: String,
    pub topic: String,
    /// "easy" | "medium" | "hard" — passed through to the prompt verbatim.
    pub difficulty: String,
    pub question_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticePaper {
    pub questions: Vec<PracticeQuestion>,
}

pub async fn generate_paper(
    llm: Arc<dyn TextGenerator>,
    request: &PracticeRequest,
) -> Result<PracticePaper, AppError> {
    if request.subject.trim().is_empty() || request.topic.trim().is_empty() {
        return Err(AppError::Validation(
            "subject and topic cannot be empty".to_string(),
        ));
    }
    if request.question_count == 0 || request.question_count > MAX_QUESTIONS {
        return Err(AppError::Validation(format!(
            "question_count must be between 1 and {MAX_QUESTIONS}"
        )));
    }

    let prompt = PRACTICE_PROMPT_TEMPLATE
        .replace("{subject}", &request.subject)
        .replace("{topic}", &request.topic)
        .replace("{difficulty}", &request.difficulty)
        .replace("{question_count}", &request.question_count.to_string());

    let raw = llm
        .generate(&prompt, PRACTICE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("practice generation failed: {e}")))?;

    let paper = parse_paper(&raw)?;
    info!(
        "Generated practice paper: {} questions on {}",
        paper.questions.len(),
        request.topic
    );
    Ok(paper)
}

fn parse_paper(raw: &str) -> Result<PracticePaper, AppError> {
    let text = strip_json_fences(raw);
    if text.trim().is_empty() {
        return Err(AppError::AnalysisParse(
            "practice generation returned empty text".to_string(),
        ));
    }
    let paper: PracticePaper = serde_json::from_str(text)
        .map_err(|e| AppError::AnalysisParse(format!("practice paper failed schema: {e}")))?;
    if paper.questions.is_empty() {
        return Err(AppError::AnalysisParse(
            "practice paper contained no questions".to_string(),
        ));
    }
    Ok(paper)
}
