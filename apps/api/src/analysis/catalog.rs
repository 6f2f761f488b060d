//! Static fallback catalog used when the video-search provider is
//! unavailable. Keyword-matched against the requested skill; every URL
//! points at a search-results page, never a specific video, so the links
//! stay valid regardless of provider content churn.
//!
//! The table is data, not control flow — extend it by adding rows.

use crate::analysis::models::Course;

/// One catalog row: a lowercase keyword matched by substring against the
/// skill, and the canned entries returned for it.
pub struct CatalogEntry {
    pub keyword: &'static str,
    pub courses: &'static [CatalogCourse],
}

pub struct CatalogCourse {
    pub title: &'static str,
    pub url: &'static str,
    pub channel: &'static str,
}

pub const FALLBACK_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        keyword: "javascript",
        courses: &[
            CatalogCourse {
                title: "JavaScript Full Course for Beginners",
                url: "https://www.youtube.com/results?search_query=javascript+full+course",
                channel: "YouTube search",
            },
            CatalogCourse {
                title: "Modern JavaScript Projects",
                url: "https://www.youtube.com/results?search_query=javascript+projects+course",
                channel: "YouTube search",
            },
        ],
    },
    CatalogEntry {
        keyword: "python",
        courses: &[
            CatalogCourse {
                title: "Python Full Course for Beginners",
                url: "https://www.youtube.com/results?search_query=python+full+course",
                channel: "YouTube search",
            },
            CatalogCourse {
                title: "Python Projects for Intermediate Learners",
                url: "https://www.youtube.com/results?search_query=python+projects+course",
                channel: "YouTube search",
            },
        ],
    },
    CatalogEntry {
        keyword: "react",
        courses: &[
            CatalogCourse {
                title: "React Full Course",
                url: "https://www.youtube.com/results?search_query=react+full+course",
                channel: "YouTube search",
            },
            CatalogCourse {
                title: "React Projects Walkthrough",
                url: "https://www.youtube.com/results?search_query=react+projects+course",
                channel: "YouTube search",
            },
        ],
    },
    CatalogEntry {
        keyword: "machine learning",
        courses: &[
            CatalogCourse {
                title: "Machine Learning Full Course",
                url: "https://www.youtube.com/results?search_query=machine+learning+full+course",
                channel: "YouTube search",
            },
            CatalogCourse {
                title: "Hands-on Machine Learning Projects",
                url: "https://www.youtube.com/results?search_query=machine+learning+projects",
                channel: "YouTube search",
            },
        ],
    },
    CatalogEntry {
        keyword: "sql",
        courses: &[
            CatalogCourse {
                title: "SQL Full Course for Beginners",
                url: "https://www.youtube.com/results?search_query=sql+full+course",
                channel: "YouTube search",
            },
            CatalogCourse {
                title: "Advanced SQL Practice",
                url: "https://www.youtube.com/results?search_query=advanced+sql+course",
                channel: "YouTube search",
            },
        ],
    },
    CatalogEntry {
        keyword: "data science",
        courses: &[
            CatalogCourse {
                title: "Data Science Full Course",
                url: "https://www.youtube.com/results?search_query=data+science+full+course",
                channel: "YouTube search",
            },
            CatalogCourse {
                title: "Data Science Portfolio Projects",
                url: "https://www.youtube.com/results?search_query=data+science+projects",
                channel: "YouTube search",
            },
        ],
    },
    CatalogEntry {
        keyword: "rust",
        courses: &[
            CatalogCourse {
                title: "Rust Programming Full Course",
                url: "https://www.youtube.com/results?search_query=rust+programming+full+course",
                channel: "YouTube search",
            },
            CatalogCourse {
                title: "Rust Projects for Practice",
                url: "https://www.youtube.com/results?search_query=rust+projects+course",
                channel: "YouTube search",
            },
        ],
    },
];

/// Looks up fallback courses for a skill by lowercase substring match.
/// Returns None when no catalog keyword matches — the caller then builds
/// the single generic search-link fallback.
pub fn lookup(skill: &str) -> Option<Vec<Course>> {
    let skill_lower = skill.to_lowercase();
    FALLBACK_CATALOG
        .iter()
        .find(|entry| skill_lower.contains(entry.keyword))
        .map(|entry| {
            entry
                .courses
                .iter()
                .map(|c| Course {
                    title: c.title.to_string(),
                    url: c.url.to_string(),
                    channel: c.channel.to_string(),
                    duration: None,
                    description: None,
                })
                .collect()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_javascript_lookup_returns_two_search_links() {
        let courses = lookup("JavaScript").expect("catalog should match");
        assert_eq!(courses.len(), 2);
        for course in &courses {
            assert!(course.url.starts_with("https://www.youtube.com/results?"));
        }
    }

    #[test]
    fn test_lookup_matches_by_substring() {
        // "Advanced Python for ML" contains "python"
        assert!(lookup("Advanced Python for ML").is_some());
    }

    #[test]
    fn test_unknown_skill_returns_none() {
        assert!(lookup("Underwater Basket Weaving").is_none());
    }

    #[test]
    fn test_all_catalog_urls_are_absolute() {
        for entry in FALLBACK_CATALOG {
            for course in entry.courses {
                assert!(
                    course.url.starts_with("https://"),
                    "catalog url not absolute: {}",
                    course.url
                );
            }
        }
    }
}
