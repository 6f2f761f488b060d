use std::sync::Arc;

use crate::chat::SessionStore;
use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::video_search::VideoSearch;

/// Shared application state injected into all route handlers via Axum
/// extractors. Both external capabilities are trait objects so tests swap
/// in fakes — no process-wide singleton clients.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn TextGenerator>,
    pub video: Arc<dyn VideoSearch>,
    /// In-memory tutoring sessions; process-lifetime only.
    pub sessions: SessionStore,
    pub config: Config,
}
