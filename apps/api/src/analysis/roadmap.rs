//! Roadmap Composer — turns a finished analysis into free-form phased
//! guidance text. Advisory content: an empty model answer becomes a fixed
//! placeholder instead of a failure; only transport errors surface.

use std::sync::Arc;

use tracing::info;

use crate::analysis::models::{Priority, SkillGapAnalysis};
use crate::analysis::prompts::{ROADMAP_PROMPT_TEMPLATE, ROADMAP_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

/// Returned when the generation capability answers with empty text.
pub const ROADMAP_PLACEHOLDER: &str = "Could not generate roadmap";

pub struct RoadmapComposer {
    llm: Arc<dyn TextGenerator>,
}

impl RoadmapComposer {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }

    pub async fn compose_roadmap(
        &self,
        analysis: &SkillGapAnalysis,
        career_goal: &str,
    ) -> Result<String, AppError> {
        let prompt = build_roadmap_prompt(analysis, career_goal);

        let text = self
            .llm
            .generate(&prompt, ROADMAP_SYSTEM)
            .await
            .map_err(|e| AppError::RoadmapGeneration(format!("roadmap call failed: {e}")))?;

        if text.trim().is_empty() {
            info!("Roadmap came back empty, substituting placeholder");
            return Ok(ROADMAP_PLACEHOLDER.to_string());
        }

        Ok(text)
    }
}

fn build_roadmap_prompt(analysis: &SkillGapAnalysis, career_goal: &str) -> String {
    let high_priority: String = analysis
        .recommendations
        .iter()
        .filter(|r| r.priority == Priority::High)
        .map(|r| format!("- {}: {}\n", r.skill, r.description))
        .collect();
    let high_priority = if high_priority.is_empty() {
        "- (none flagged; cover the skill gaps in order)\n".to_string()
    } else {
        high_priority
    };

    ROADMAP_PROMPT_TEMPLATE
        .replace("{career_goal}", career_goal)
        .replace("{current_skills}", &analysis.current_skills.join(", "))
        .replace("{skill_gaps}", &analysis.skill_gaps.join(", "))
        .replace("{experience}", &analysis.experience)
        .replace("{overall_score}", &analysis.overall_score.to_string())
        .replace("{high_priority}", &high_priority)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::Recommendation;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    struct FakeGenerator(Result<String, ()>);

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            self.0.clone().map_err(|_| LlmError::EmptyContent)
        }
    }

    fn sample_analysis() -> SkillGapAnalysis {
        SkillGapAnalysis {
            current_skills: vec!["JavaScript".to_string()],
            required_skills: vec!["Python".to_string()],
            skill_gaps: vec!["Python".to_string(), "Statistics".to_string()],
            experience: "5 years frontend".to_string(),
            recommendations: vec![
                Recommendation {
                    skill: "Python".to_string(),
                    priority: Priority::High,
                    description: "Core ML language".to_string(),
                    courses: vec![],
                },
                Recommendation {
                    skill: "Statistics".to_string(),
                    priority: Priority::Low,
                    description: "Background math".to_string(),
                    courses: vec![],
                },
            ],
            overall_score: 40,
        }
    }

    #[test]
    fn test_prompt_includes_only_high_priority_recommendations() {
        let prompt = build_roadmap_prompt(&sample_analysis(), "Become an ML Engineer");
        assert!(prompt.contains("Python: Core ML language"));
        assert!(!prompt.contains("Statistics: Background math"));
        assert!(prompt.contains("40/100"));
        assert!(prompt.contains("Become an ML Engineer"));
    }

    #[test]
    fn test_prompt_handles_no_high_priority() {
        let mut analysis = sample_analysis();
        for rec in &mut analysis.recommendations {
            rec.priority = Priority::Medium;
        }
        let prompt = build_roadmap_prompt(&analysis, "goal");
        assert!(prompt.contains("none flagged"));
    }

    #[tokio::test]
    async fn test_empty_output_becomes_placeholder() {
        let composer = RoadmapComposer::new(Arc::new(FakeGenerator(Ok("  \n".to_string()))));
        let roadmap = composer
            .compose_roadmap(&sample_analysis(), "goal")
            .await
            .unwrap();
        assert_eq!(roadmap, ROADMAP_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_roadmap_error() {
        let composer = RoadmapComposer::new(Arc::new(FakeGenerator(Err(()))));
        let err = composer
            .compose_roadmap(&sample_analysis(), "goal")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::RoadmapGeneration(_)));
    }

    #[tokio::test]
    async fn test_normal_output_passes_through() {
        let composer =
            RoadmapComposer::new(Arc::new(FakeGenerator(Ok("Phase 1: Python".to_string()))));
        let roadmap = composer
            .compose_roadmap(&sample_analysis(), "goal")
            .await
            .unwrap();
        assert_eq!(roadmap, "Phase 1: Python");
    }
}
