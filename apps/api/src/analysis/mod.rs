// Career skill-gap analysis pipeline.
// Flow: resume text + goal → skill-gap analysis (1 LLM call) →
// per-recommendation course fan-out (N concurrent lookups, fault-isolated) →
// roadmap composition (1 LLM call).
// All LLM calls go through llm_client; all video lookups through video_search.

pub mod catalog;
pub mod course_finder;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod roadmap;
pub mod skill_gap;
