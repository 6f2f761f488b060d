// All LLM prompt constants for the career-analysis module.
// Cross-cutting fragments live in llm_client::prompts.

/// System prompt for skill-gap analysis — enforces JSON-only output.
pub const ANALYSIS_SYSTEM: &str =
    "You are an expert career coach and resume analyst. \
    Compare a resume against a career goal and identify skill gaps. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Skill-gap analysis prompt template.
/// Replace `{resume_text}`, `{career_goal}` and `{target_role}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the resume below against the stated career goal.

Return a JSON object with this EXACT schema (no extra fields):
{
  "current_skills": ["JavaScript", "React"],
  "required_skills": ["Python", "Machine Learning"],
  "skill_gaps": ["Python", "Machine Learning", "Statistics"],
  "experience": "one-sentence summary of the candidate's experience level",
  "recommendations": [
    {
      "skill": "Python",
      "priority": "High",
      "description": "why this skill matters for the goal and how to approach it"
    }
  ],
  "overall_score": 40
}

Rules:
- "current_skills": skills clearly evidenced in the resume.
- "required_skills": skills the career goal / target role implies.
- "skill_gaps": required skills not evidenced in the resume.
- "priority" must be exactly one of "High", "Medium", "Low".
- "skill" must be non-empty for every recommendation.
- Order recommendations from most to least important.
- "overall_score" is an integer from 0 to 100 measuring readiness for the goal today.

CAREER GOAL: {career_goal}
TARGET ROLE: {target_role}

RESUME:
{resume_text}"#;

/// System prompt for roadmap composition — free text, no schema.
pub const ROADMAP_SYSTEM: &str = "You are a pragmatic career mentor. \
    Write concrete, phased learning plans with realistic timelines. \
    Plain text or light markdown. No JSON.";

/// Roadmap prompt template.
/// Replace: {career_goal}, {current_skills}, {skill_gaps}, {experience},
///          {overall_score}, {high_priority}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Build a phased learning roadmap for this candidate.

CAREER GOAL: {career_goal}
CURRENT SKILLS: {current_skills}
SKILL GAPS: {skill_gaps}
EXPERIENCE: {experience}
READINESS SCORE: {overall_score}/100

HIGH-PRIORITY RECOMMENDATIONS:
{high_priority}

Write an actionable narrative organized in phases (e.g. months 1-2, 3-4, ...),
each phase naming the skills to build, how to practice them, and a milestone
that shows the phase is done. Focus on the high-priority gaps first."#;
