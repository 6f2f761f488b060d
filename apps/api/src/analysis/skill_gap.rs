//! Skill Gap Analyzer — one strict-schema LLM call, then a fault-isolated
//! concurrent fan-out attaching courses to every recommendation.
//!
//! Partial-failure contract: analysis success is NOT coupled to course
//! search availability. Each lookup task independently resolves to
//! courses-or-fallback; a single bad lookup cannot fail or cancel siblings.

use std::sync::Arc;

use futures_util::future::join_all;
use serde::Deserialize;
use tracing::{info, warn};

use crate::analysis::course_finder::CourseFinder;
use crate::analysis::models::{Priority, Recommendation, SkillGapAnalysis};
use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, TextGenerator};

pub struct SkillGapAnalyzer {
    llm: Arc<dyn TextGenerator>,
    course_finder: CourseFinder,
}

impl SkillGapAnalyzer {
    pub fn new(llm: Arc<dyn TextGenerator>, course_finder: CourseFinder) -> Self {
        Self { llm, course_finder }
    }

    /// Analyzes a resume against a career goal.
    ///
    /// Transport failures surface as `Llm`; schema violations in the model's
    /// answer surface as `AnalysisParse` and are never blind-retried here —
    /// they indicate a contract violation, not a transient fault.
    pub async fn analyze(
        &self,
        resume_text: &str,
        career_goal: &str,
        target_role: Option<&str>,
    ) -> Result<SkillGapAnalysis, AppError> {
        let prompt = ANALYSIS_PROMPT_TEMPLATE
            .replace("{career_goal}", career_goal)
            .replace("{target_role}", target_role.unwrap_or("not specified"))
            .replace("{resume_text}", resume_text);

        let raw = self
            .llm
            .generate(&prompt, ANALYSIS_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("skill-gap analysis call failed: {e}")))?;

        let mut analysis = parse_analysis(&raw)?;
        info!(
            "Analysis parsed: {} gaps, {} recommendations, score {}",
            analysis.skill_gaps.len(),
            analysis.recommendations.len(),
            analysis.overall_score
        );

        // Concurrent fan-out: one lookup per recommendation, joined with
        // fault isolation. Each task owns its own course list; merging back
        // happens by position after all tasks settle, so there is no shared
        // mutable state and no write-write race.
        let lookups = analysis.recommendations.iter().map(|rec| {
            let finder = self.course_finder.clone();
            let skill = rec.skill.clone();
            let goal = career_goal.to_string();
            async move {
                match finder.find_courses(&skill, &goal).await {
                    Ok(courses) => courses,
                    Err(e) => {
                        warn!("Course lookup for '{skill}' failed, leaving empty: {e}");
                        Vec::new()
                    }
                }
            }
        });
        let course_lists = join_all(lookups).await;

        for (rec, courses) in analysis.recommendations.iter_mut().zip(course_lists) {
            rec.courses = courses;
        }

        Ok(analysis)
    }
}

// Raw shapes for strict validation of the model's answer. `overall_score`
// is taken wide and clamped afterwards so the [0,100] invariant holds even
// against a misbehaving model.
#[derive(Debug, Deserialize)]
struct RawRecommendation {
    skill: String,
    priority: Priority,
    description: String,
}

#[derive(Debug, Deserialize)]
struct RawAnalysis {
    current_skills: Vec<String>,
    required_skills: Vec<String>,
    skill_gaps: Vec<String>,
    experience: String,
    recommendations: Vec<RawRecommendation>,
    overall_score: i64,
}

/// Validates the model's raw text against the analysis schema.
/// Empty text, invalid JSON, and missing required fields all fail with
/// `AnalysisParse`.
fn parse_analysis(raw: &str) -> Result<SkillGapAnalysis, AppError> {
    let text = strip_json_fences(raw);
    if text.trim().is_empty() {
        return Err(AppError::AnalysisParse(
            "generation capability returned empty text".to_string(),
        ));
    }

    let parsed: RawAnalysis = serde_json::from_str(text)
        .map_err(|e| AppError::AnalysisParse(format!("response failed schema validation: {e}")))?;

    if parsed
        .recommendations
        .iter()
        .any(|r| r.skill.trim().is_empty())
    {
        return Err(AppError::AnalysisParse(
            "recommendation with empty skill".to_string(),
        ));
    }

    Ok(SkillGapAnalysis {
        current_skills: parsed.current_skills,
        required_skills: parsed.required_skills,
        skill_gaps: parsed.skill_gaps,
        experience: parsed.experience,
        recommendations: parsed
            .recommendations
            .into_iter()
            .map(|r| Recommendation {
                skill: r.skill,
                priority: r.priority,
                description: r.description,
                courses: Vec::new(),
            })
            .collect(),
        overall_score: parsed.overall_score.clamp(0, 100) as u8,
    })
}
