//! Axum route handlers for the career-analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::course_finder::CourseFinder;
use crate::analysis::models::Course;
use crate::analysis::pipeline::{run_career_analysis, CareerAnalysisRequest, CareerAnalysisResult};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CourseSearchRequest {
    pub skill: String,
    pub career_goal: String,
}

#[derive(Debug, Serialize)]
pub struct CourseSearchResponse {
    pub courses: Vec<Course>,
}

/// POST /api/v1/career/analyze
///
/// Full pipeline: skill-gap analysis (with its concurrent course fan-out)
/// followed by roadmap composition. Returns `{analysis, roadmap}` or a
/// typed failure distinguishing "could not analyze" from "could not build
/// roadmap".
pub async fn handle_career_analysis(
    State(state): State<AppState>,
    Json(request): Json<CareerAnalysisRequest>,
) -> Result<Json<CareerAnalysisResult>, AppError> {
    let result = run_career_analysis(state.llm.clone(), state.video.clone(), request).await?;
    Ok(Json(result))
}

/// POST /api/v1/courses/search
///
/// Direct Course Finder access — used by the UI's "find more courses"
/// action. Degrades to the fallback catalog when the provider is down.
pub async fn handle_course_search(
    State(state): State<AppState>,
    Json(request): Json<CourseSearchRequest>,
) -> Result<Json<CourseSearchResponse>, AppError> {
    let finder = CourseFinder::new(state.video.clone());
    let courses = finder
        .find_courses(&request.skill, &request.career_goal)
        .await?;
    Ok(Json(CourseSearchResponse { courses }))
}
