//! Video Search — the capability behind live course suggestions.
//!
//! Production impl is the YouTube Data API v3: `search.list` for candidates
//! (embeddable, safe-search, medium-or-longer videos only) followed by
//! `videos.list` for ISO-8601 durations. Callers treat every error variant
//! as "provider unavailable" — a missing credential and a transport failure
//! look the same from the outside, and the Course Finder falls back either
//! way.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const VIDEOS_URL: &str = "https://www.googleapis.com/youtube/v3/videos";

#[derive(Debug, Error)]
pub enum VideoSearchError {
    #[error("No video search credential configured")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// A normalized video candidate returned by the search capability.
#[derive(Debug, Clone)]
pub struct VideoResult {
    pub id: String,
    pub title: String,
    pub description: String,
    pub channel_title: String,
    /// ISO-8601 duration (e.g. "PT1H12M30S"); None when the videos.list
    /// enrichment call did not return this id.
    pub duration: Option<String>,
}

/// The video-search capability. Held in `AppState` as `Arc<dyn VideoSearch>`
/// so tests can inject fakes or simulate outages.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<VideoResult>, VideoSearchError>;
}

// ── YouTube wire types ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "channelTitle", default)]
    channel_title: String,
}

#[derive(Debug, Deserialize)]
struct VideosListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: String,
    #[serde(rename = "contentDetails")]
    content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    duration: String,
}

// ── Production client ───────────────────────────────────────────────────────

/// YouTube-backed `VideoSearch`. Constructed with an optional API key; a
/// missing key makes every call fail with `MissingCredential`, which callers
/// absorb as an outage.
#[derive(Clone)]
pub struct YouTubeClient {
    client: Client,
    api_key: Option<String>,
}

impl YouTubeClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(15))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    async fn fetch_durations(
        &self,
        api_key: &str,
        ids: &[String],
    ) -> Result<VideosListResponse, VideoSearchError> {
        let response = self
            .client
            .get(VIDEOS_URL)
            .query(&[
                ("part", "contentDetails"),
                ("id", &ids.join(",")),
                ("key", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VideoSearchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl VideoSearch for YouTubeClient {
    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<VideoResult>, VideoSearchError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(VideoSearchError::MissingCredential)?;

        let max = max_results.to_string();
        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", max.as_str()),
                ("videoDuration", "medium"),
                ("videoEmbeddable", "true"),
                ("safeSearch", "strict"),
                ("key", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VideoSearchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let search: SearchListResponse = response.json().await?;

        let mut results: Vec<VideoResult> = search
            .items
            .into_iter()
            .filter_map(|item| {
                item.id.video_id.map(|id| VideoResult {
                    id,
                    title: item.snippet.title,
                    description: item.snippet.description,
                    channel_title: item.snippet.channel_title,
                    duration: None,
                })
            })
            .collect();

        if results.is_empty() {
            return Ok(results);
        }

        // Second call for durations; ids come back in arbitrary order.
        let ids: Vec<String> = results.iter().map(|r| r.id.clone()).collect();
        let videos = self.fetch_durations(api_key, &ids).await?;
        for item in videos.items {
            if let Some(result) = results.iter_mut().find(|r| r.id == item.id) {
                result.duration = Some(item.content_details.duration);
            }
        }

        debug!("Video search for '{}' returned {} results", query, results.len());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_credential_errors_without_network() {
        let client = YouTubeClient::new(None);
        let err = client.search("rust tutorial", 2).await.unwrap_err();
        assert!(matches!(err, VideoSearchError::MissingCredential));
    }

    #[test]
    fn test_search_response_deserializes() {
        let json = r#"{
            "items": [
                {
                    "id": {"videoId": "abc123"},
                    "snippet": {
                        "title": "Learn Rust",
                        "description": "A full course",
                        "channelTitle": "RustChannel"
                    }
                },
                {
                    "id": {},
                    "snippet": {"title": "channel result", "description": "", "channelTitle": "x"}
                }
            ]
        }"#;
        let parsed: SearchListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items.len(), 2);
        assert_eq!(parsed.items[0].id.video_id.as_deref(), Some("abc123"));
        assert!(parsed.items[1].id.video_id.is_none());
    }

    #[test]
    fn test_videos_response_deserializes_duration() {
        let json = r#"{
            "items": [
                {"id": "abc123", "contentDetails": {"duration": "PT1H2M3S"}}
            ]
        }"#;
        let parsed: VideosListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items[0].content_details.duration, "PT1H2M3S");
    }
}
