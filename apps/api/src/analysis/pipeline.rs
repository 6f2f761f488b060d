//! Pipeline Orchestrator — input validation, then Analyzer (with its
//! embedded course fan-out), then Composer.
//!
//! Flow: validate → analyze (1 LLM call + N concurrent course lookups) →
//!       compose roadmap (1 LLM call) → {analysis, roadmap}.
//!
//! The Composer is never invoked when the Analyzer fails. A Composer
//! failure surfaces `RoadmapGeneration` and the computed analysis is
//! discarded with it — the pipeline is all-or-nothing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::course_finder::CourseFinder;
use crate::analysis::models::SkillGapAnalysis;
use crate::analysis::roadmap::RoadmapComposer;
use crate::analysis::skill_gap::SkillGapAnalyzer;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::video_search::VideoSearch;

/// Resumes shorter than this cannot be meaningfully analyzed.
const MIN_RESUME_CHARS: usize = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct CareerAnalysisRequest {
    pub resume_text: String,
    pub career_goal: String,
    pub target_role: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerAnalysisResult {
    pub analysis: SkillGapAnalysis,
    pub roadmap: String,
}

/// Runs the full career-analysis pipeline.
///
/// Validation fails fast with no external calls. The analyzer's course
/// fan-out is fault-isolated internally, so the only failures that reach
/// this level are critical-path ones: `Llm`, `AnalysisParse`,
/// `RoadmapGeneration`.
pub async fn run_career_analysis(
    llm: Arc<dyn TextGenerator>,
    video: Arc<dyn VideoSearch>,
    request: CareerAnalysisRequest,
) -> Result<CareerAnalysisResult, AppError> {
    validate(&request)?;

    let analyzer = SkillGapAnalyzer::new(llm.clone(), CourseFinder::new(video));

    // Step 1: analysis + course fan-out (must finish before the roadmap —
    // the composer prompt embeds the finished analysis)
    info!("Starting career analysis for goal '{}'", request.career_goal);
    let analysis = analyzer
        .analyze(
            &request.resume_text,
            &request.career_goal,
            request.target_role.as_deref(),
        )
        .await?;

    // Step 2: roadmap
    let composer = RoadmapComposer::new(llm);
    let roadmap = composer
        .compose_roadmap(&analysis, &request.career_goal)
        .await?;
    info!("Career analysis complete, score {}", analysis.overall_score);

    Ok(CareerAnalysisResult { analysis, roadmap })
}

fn validate(request: &CareerAnalysisRequest) -> Result<(), AppError> {
    if request.resume_text.trim().len() < MIN_RESUME_CHARS {
        return Err(AppError::Validation(format!(
            "resume_text must be at least {MIN_RESUME_CHARS} characters"
        )));
    }
    if request.career_goal.trim().is_empty() {
        return Err(AppError::Validation(
            "career_goal cannot be empty".to_string(),
        ));
    }
    Ok(())
}
