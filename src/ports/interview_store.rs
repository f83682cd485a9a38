//! Interview Store Port - Interface for persisting interview sessions.
//!
//! The persistence backend is an external collaborator (assumed to be a
//! key-value store); this port defines how sessions are saved and loaded.

use async_trait::async_trait;

use crate::domain::foundation::InterviewId;
use crate::domain::interview::InterviewSession;

/// Errors that can occur during interview storage operations
#[derive(Debug, thiserror::Error)]
pub enum InterviewStoreError {
    #[error("Interview not found: {0}")]
    NotFound(InterviewId),

    #[error("Failed to serialize interview: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize interview: {0}")]
    DeserializationFailed(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Port for persisting and loading interview sessions
#[async_trait]
pub trait InterviewStore: Send + Sync {
    /// Save an interview session, overwriting any previous snapshot.
    ///
    /// # Errors
    /// Returns `InterviewStoreError` if save fails
    async fn save(&self, session: &InterviewSession) -> Result<(), InterviewStoreError>;

    /// Load an interview session by ID.
    ///
    /// # Errors
    /// Returns `InterviewStoreError::NotFound` if no session exists
    async fn load(&self, id: InterviewId) -> Result<InterviewSession, InterviewStoreError>;

    /// Check whether a session exists.
    async fn exists(&self, id: InterviewId) -> Result<bool, InterviewStoreError>;

    /// Delete a session.
    ///
    /// # Errors
    /// Returns `InterviewStoreError` if deletion fails
    async fn delete(&self, id: InterviewId) -> Result<(), InterviewStoreError>;
}
