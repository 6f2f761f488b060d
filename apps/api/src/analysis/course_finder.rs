//! Course Finder — turns a (skill, career goal) pair into course
//! suggestions.
//!
//! Total for availability reasons: provider outages, missing credentials,
//! and transport errors all degrade into the static fallback catalog (or a
//! single generic search link) instead of propagating. The only surfaced
//! error is an empty skill/goal, which is a caller bug.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::analysis::catalog;
use crate::analysis::models::Course;
use crate::errors::AppError;
use crate::video_search::{VideoResult, VideoSearch};

/// How many candidates to request per lookup. Small on purpose — each
/// analysis fans out one lookup per recommendation.
const MAX_COURSE_RESULTS: u32 = 2;

/// Minimum length for a video to count as course-like. Shorter clips are
/// assumed to be teasers or shorts and dropped.
const MIN_COURSE_MINUTES: u32 = 10;

#[derive(Clone)]
pub struct CourseFinder {
    video: Arc<dyn VideoSearch>,
}

impl CourseFinder {
    pub fn new(video: Arc<dyn VideoSearch>) -> Self {
        Self { video }
    }

    /// Finds course suggestions for a skill in the context of a career goal.
    ///
    /// Never fails for provider-availability reasons; the result may be
    /// degraded (catalog entries or a single search link) but is always
    /// usable. Empty `skill`/`career_goal` is the one surfaced error.
    pub async fn find_courses(
        &self,
        skill: &str,
        career_goal: &str,
    ) -> Result<Vec<Course>, AppError> {
        if skill.trim().is_empty() {
            return Err(AppError::InvalidQuery("skill cannot be empty".to_string()));
        }
        if career_goal.trim().is_empty() {
            return Err(AppError::InvalidQuery(
                "career_goal cannot be empty".to_string(),
            ));
        }

        let query = format!("{skill} course tutorial for {career_goal}");

        match self.video.search(&query, MAX_COURSE_RESULTS).await {
            Ok(results) => {
                let courses: Vec<Course> = results
                    .into_iter()
                    .filter(|r| is_course_length(r.duration.as_deref()))
                    .map(to_course)
                    .collect();
                debug!("Course search for '{skill}' kept {} results", courses.len());
                Ok(courses)
            }
            Err(e) => {
                warn!("Course search unavailable for '{skill}', using fallback: {e}");
                Ok(fallback_courses(skill))
            }
        }
    }
}

fn to_course(result: VideoResult) -> Course {
    Course {
        title: result.title,
        url: format!("https://www.youtube.com/watch?v={}", result.id),
        channel: result.channel_title,
        duration: result.duration,
        description: Some(result.description),
    }
}

/// Keeps videos with an hour component or at least `MIN_COURSE_MINUTES`.
/// Unknown durations pass — the search already restricted to medium-or-longer
/// videos, and dropping them would punish a partial enrichment failure.
fn is_course_length(duration: Option<&str>) -> bool {
    let Some(duration) = duration else {
        return true;
    };
    match parse_iso8601_minutes(duration) {
        Some(total_minutes) => total_minutes >= MIN_COURSE_MINUTES,
        None => true,
    }
}

/// Parses an ISO-8601 video duration ("PT1H12M30S", "PT45M", "PT59S") into
/// total whole minutes. Returns None for strings not in that shape.
fn parse_iso8601_minutes(duration: &str) -> Option<u32> {
    let rest = duration.strip_prefix("PT")?;
    if rest.is_empty() {
        return None;
    }

    let mut total_minutes: u32 = 0;
    let mut number = String::new();
    for ch in rest.chars() {
        if ch.is_ascii_digit() {
            number.push(ch);
        } else {
            let value: u32 = number.parse().ok()?;
            number.clear();
            match ch {
                'H' => total_minutes += value * 60,
                'M' => total_minutes += value,
                'S' => {} // seconds never move a video over the cutoff
                _ => return None,
            }
        }
    }
    if !number.is_empty() {
        // Trailing digits without a unit designator
        return None;
    }
    Some(total_minutes)
}

/// Deterministic fallback when the provider is down: catalog entries when a
/// keyword matches, otherwise exactly one generic entry deep-linking to a
/// search page for the skill.
pub fn fallback_courses(skill: &str) -> Vec<Course> {
    if let Some(courses) = catalog::lookup(skill) {
        return courses;
    }

    let query = encode_query(&format!("{skill} tutorial course"));
    vec![Course {
        title: format!("{skill} tutorial courses"),
        url: format!("https://www.youtube.com/results?search_query={query}"),
        channel: "YouTube search".to_string(),
        duration: None,
        description: Some(
            "Live course search was unavailable; browse matching tutorials.".to_string(),
        ),
    }]
}

/// Minimal query-string encoder: unreserved characters pass through, spaces
/// become '+', everything else is percent-encoded.
fn encode_query(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video_search::VideoSearchError;
    use async_trait::async_trait;

    struct DownProvider;

    #[async_trait]
    impl VideoSearch for DownProvider {
        async fn search(
            &self,
            _query: &str,
            _max_results: u32,
        ) -> Result<Vec<VideoResult>, VideoSearchError> {
            Err(VideoSearchError::MissingCredential)
        }
    }

    struct FixedProvider(Vec<VideoResult>);

    #[async_trait]
    impl VideoSearch for FixedProvider {
        async fn search(
            &self,
            _query: &str,
            _max_results: u32,
        ) -> Result<Vec<VideoResult>, VideoSearchError> {
            Ok(self.0.clone())
        }
    }

    fn video(id: &str, duration: Option<&str>) -> VideoResult {
        VideoResult {
            id: id.to_string(),
            title: format!("video {id}"),
            description: "desc".to_string(),
            channel_title: "chan".to_string(),
            duration: duration.map(|d| d.to_string()),
        }
    }

    #[test]
    fn test_parse_iso8601_minutes() {
        assert_eq!(parse_iso8601_minutes("PT1H12M30S"), Some(72));
        assert_eq!(parse_iso8601_minutes("PT45M"), Some(45));
        assert_eq!(parse_iso8601_minutes("PT59S"), Some(0));
        assert_eq!(parse_iso8601_minutes("PT2H"), Some(120));
        assert_eq!(parse_iso8601_minutes("45M"), None);
        assert_eq!(parse_iso8601_minutes("PT"), None);
        assert_eq!(parse_iso8601_minutes("PT12"), None);
    }

    #[test]
    fn test_duration_filter_drops_short_clips() {
        assert!(!is_course_length(Some("PT4M20S")));
        assert!(is_course_length(Some("PT10M")));
        assert!(is_course_length(Some("PT1H")));
        // unknown durations pass
        assert!(is_course_length(None));
        assert!(is_course_length(Some("garbage")));
    }

    #[test]
    fn test_encode_query_keeps_skill_visible() {
        let encoded = encode_query("JavaScript tutorial course");
        assert_eq!(encoded, "JavaScript+tutorial+course");
        let encoded = encode_query("C++ basics");
        assert_eq!(encoded, "C%2B%2B+basics");
    }

    #[tokio::test]
    async fn test_empty_skill_is_invalid_query() {
        let finder = CourseFinder::new(Arc::new(DownProvider));
        let err = finder.find_courses("", "Become an engineer").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidQuery(_)));
    }

    #[tokio::test]
    async fn test_empty_goal_is_invalid_query() {
        let finder = CourseFinder::new(Arc::new(DownProvider));
        let err = finder.find_courses("Python", "  ").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidQuery(_)));
    }

    #[tokio::test]
    async fn test_provider_down_falls_back_to_catalog() {
        let finder = CourseFinder::new(Arc::new(DownProvider));
        let courses = finder
            .find_courses("JavaScript", "Become a Machine Learning Engineer")
            .await
            .unwrap();
        // JavaScript catalog: exactly two search-results links, no exception
        assert_eq!(courses.len(), 2);
        for course in &courses {
            assert!(course.url.contains("youtube.com/results"));
        }
    }

    #[tokio::test]
    async fn test_provider_down_unknown_skill_gets_generic_link() {
        let finder = CourseFinder::new(Arc::new(DownProvider));
        let courses = finder
            .find_courses("Quantum Basket Weaving", "Become a weaver")
            .await
            .unwrap();
        assert_eq!(courses.len(), 1);
        assert!(courses[0].url.contains("Quantum+Basket+Weaving"));
    }

    #[tokio::test]
    async fn test_live_results_filtered_and_mapped() {
        let finder = CourseFinder::new(Arc::new(FixedProvider(vec![
            video("long", Some("PT1H5M")),
            video("short", Some("PT3M")),
        ])));
        let courses = finder.find_courses("Rust", "Become a systems engineer").await.unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].url, "https://www.youtube.com/watch?v=long");
        assert_eq!(courses[0].duration.as_deref(), Some("PT1H5M"));
    }

    #[tokio::test]
    async fn test_live_empty_results_stay_empty() {
        // An available provider with no hits is not an outage — no fallback.
        let finder = CourseFinder::new(Arc::new(FixedProvider(vec![])));
        let courses = finder.find_courses("Rust", "goal").await.unwrap();
        assert!(courses.is_empty());
    }
}
