//! Data model for the career skill-gap pipeline.

use serde::{Deserialize, Serialize};

/// Priority assigned by the analyzer to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A single course suggestion attached to a recommendation.
///
/// Invariant: `url` is always a syntactically valid external link, including
/// fallback mode (fallback links point to a search-results page, not a
/// specific video).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub url: String,
    pub channel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One skill the analyzer recommends working on, with its attached courses.
/// `courses` is never null — a failed lookup leaves it empty or filled from
/// the fallback catalog, and each entry list is owned exclusively by the
/// lookup task that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub skill: String,
    pub priority: Priority,
    pub description: String,
    #[serde(default)]
    pub courses: Vec<Course>,
}

/// The finished skill-gap analysis. Constructed fresh per request and never
/// mutated after return. Recommendation order is exactly as the generator
/// produced it — not re-sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGapAnalysis {
    pub current_skills: Vec<String>,
    pub required_skills: Vec<String>,
    /// Semantically required − current as judged by the model; inference
    /// based, may contain near-duplicates. Not a strict set difference.
    pub skill_gaps: Vec<String>,
    pub experience: String,
    pub recommendations: Vec<Recommendation>,
    /// Readiness score, always within [0, 100].
    pub overall_score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_serde_round_trip() {
        let json = r#""High""#;
        let p: Priority = serde_json::from_str(json).unwrap();
        assert_eq!(p, Priority::High);
        assert_eq!(serde_json::to_string(&p).unwrap(), json);
    }

    #[test]
    fn test_recommendation_courses_default_to_empty() {
        let json = r#"{
            "skill": "Python",
            "priority": "High",
            "description": "Core language for ML work"
        }"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert!(rec.courses.is_empty());
    }

    #[test]
    fn test_analysis_deserializes_full_shape() {
        let json = r#"{
            "current_skills": ["JavaScript", "React"],
            "required_skills": ["Python", "Machine Learning"],
            "skill_gaps": ["Python", "Machine Learning", "Statistics"],
            "experience": "5 years frontend development",
            "recommendations": [
                {"skill": "Python", "priority": "High", "description": "Start here"}
            ],
            "overall_score": 35
        }"#;
        let analysis: SkillGapAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.overall_score, 35);
        assert_eq!(analysis.recommendations.len(), 1);
        assert_eq!(analysis.recommendations[0].priority, Priority::High);
    }

    #[test]
    fn test_course_optional_fields_omitted_when_none() {
        let course = Course {
            title: "t".to_string(),
            url: "https://example.com".to_string(),
            channel: "c".to_string(),
            duration: None,
            description: None,
        };
        let json = serde_json::to_string(&course).unwrap();
        assert!(!json.contains("duration"));
        assert!(!json.contains("description"));
    }
}
