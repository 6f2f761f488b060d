pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::chat::handlers as chat_handlers;
use crate::ingest::handlers as ingest_handlers;
use crate::practice::handlers as practice_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career analysis (core pipeline)
        .route(
            "/api/v1/career/analyze",
            post(analysis_handlers::handle_career_analysis),
        )
        .route(
            "/api/v1/courses/search",
            post(analysis_handlers::handle_course_search),
        )
        // Tutoring chat
        .route(
            "/api/v1/chat/sessions",
            post(chat_handlers::handle_create_session).get(chat_handlers::handle_list_sessions),
        )
        .route(
            "/api/v1/chat/sessions/:id",
            get(chat_handlers::handle_get_session),
        )
        .route(
            "/api/v1/chat/sessions/:id/messages",
            post(chat_handlers::handle_post_message),
        )
        // Practice papers
        .route(
            "/api/v1/practice/generate",
            post(practice_handlers::handle_generate_paper),
        )
        // File ingestion
        .route(
            "/api/v1/ingest/resume",
            post(ingest_handlers::handle_ingest_resume),
        )
        .with_state(state)
}
