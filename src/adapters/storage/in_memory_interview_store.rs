//! In-Memory Interview Store Adapter
//!
//! Stores interview sessions in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::InterviewId;
use crate::domain::interview::InterviewSession;
use crate::ports::{InterviewStore, InterviewStoreError};

/// In-memory storage for interview sessions
#[derive(Debug, Clone)]
pub struct InMemoryInterviewStore {
    sessions: Arc<RwLock<HashMap<InterviewId, InterviewSession>>>,
}

impl InMemoryInterviewStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored sessions (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    /// Get the number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for InMemoryInterviewStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InterviewStore for InMemoryInterviewStore {
    async fn save(&self, session: &InterviewSession) -> Result<(), InterviewStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn load(&self, id: InterviewId) -> Result<InterviewSession, InterviewStoreError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .cloned()
            .ok_or(InterviewStoreError::NotFound(id))
    }

    async fn exists(&self, id: InterviewId) -> Result<bool, InterviewStoreError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.contains_key(&id))
    }

    async fn delete(&self, id: InterviewId) -> Result<(), InterviewStoreError> {
        self.sessions.write().await.remove(&id);
        Ok(())
    }
}
