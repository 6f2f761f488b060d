//! Tutoring chat — thin CRUD over an in-memory session store plus one LLM
//! call per student message. Sessions live for the process lifetime only;
//! durability is out of scope.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatSession {
    pub id: Uuid,
    pub title: String,
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub title: String,
    pub message_count: usize,
    pub created_at: DateTime<Utc>,
}

/// In-memory session store shared across handlers. Cheap to clone; all
/// clones see the same sessions.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, ChatSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, title: String) -> ChatSession {
        let session = ChatSession {
            id: Uuid::new_v4(),
            title,
            messages: Vec::new(),
            created_at: Utc::now(),
        };
        self.inner
            .write()
            .await
            .insert(session.id, session.clone());
        session
    }

    pub async fn list(&self) -> Vec<SessionSummary> {
        let mut summaries: Vec<SessionSummary> = self
            .inner
            .read()
            .await
            .values()
            .map(|s| SessionSummary {
                id: s.id,
                title: s.title.clone(),
                message_count: s.messages.len(),
                created_at: s.created_at,
            })
            .collect();
        summaries.sort_by_key(|s| std::cmp::Reverse(s.created_at));
        summaries
    }

    pub async fn get(&self, id: Uuid) -> Option<ChatSession> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Appends a message; returns false when the session does not exist.
    pub async fn append(&self, id: Uuid, message: ChatMessage) -> bool {
        match self.inner.write().await.get_mut(&id) {
            Some(session) => {
                session.messages.push(message);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(role: Role, content: &str) -> ChatMessage {
        ChatMessage {
            role,
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_session() {
        let store = SessionStore::new();
        let session = store.create("Algebra help".to_string()).await;
        let fetched = store.get(session.id).await.unwrap();
        assert_eq!(fetched.title, "Algebra help");
        assert!(fetched.messages.is_empty());
    }

    #[tokio::test]
    async fn test_append_to_missing_session_is_false() {
        let store = SessionStore::new();
        assert!(!store.append(Uuid::new_v4(), message(Role::User, "hi")).await);
    }

    #[tokio::test]
    async fn test_list_counts_messages() {
        let store = SessionStore::new();
        let session = store.create("s".to_string()).await;
        store.append(session.id, message(Role::User, "q")).await;
        store
            .append(session.id, message(Role::Assistant, "a"))
            .await;
        let summaries = store.list().await;
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].message_count, 2);
    }
}
