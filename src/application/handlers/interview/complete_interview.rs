//! CompleteInterviewHandler - Build the summary and hand it off once
//!
//! The handoff contract: exactly one summary per completed interview, and
//! its output string is the sole input to the external generation
//! collaborator. Retry, if needed, is that collaborator's responsibility.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::InterviewId;
use crate::ports::{
    InterviewStore, InterviewStoreError, ProfileGenerator, ProfileGeneratorError,
};

/// Command to complete an interview
#[derive(Debug, Clone)]
pub struct CompleteInterviewCommand {
    pub interview_id: InterviewId,
}

/// Result of completing an interview
#[derive(Debug, Clone)]
pub struct CompleteInterviewResult {
    /// The handoff summary that was delivered
    pub summary: String,
    /// The generated assistant profile returned by the collaborator
    pub profile: String,
    /// Ordered transcript of (field_key, value) pairs
    pub answers: Vec<(String, String)>,
}

/// Error type for completing an interview
#[derive(Debug)]
pub enum CompleteInterviewError {
    /// No interview with this ID
    NotFound(InterviewId),
    /// Questions remain unanswered and unskipped
    NotComplete(InterviewId),
    /// Storage error
    Storage(String),
    /// The generation collaborator failed
    Generation(String),
}

impl std::fmt::Display for CompleteInterviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompleteInterviewError::NotFound(id) => write!(f, "Interview not found: {}", id),
            CompleteInterviewError::NotComplete(id) => {
                write!(f, "Interview still has open questions: {}", id)
            }
            CompleteInterviewError::Storage(err) => write!(f, "Storage error: {}", err),
            CompleteInterviewError::Generation(err) => write!(f, "Generation error: {}", err),
        }
    }
}

impl std::error::Error for CompleteInterviewError {}

impl From<InterviewStoreError> for CompleteInterviewError {
    fn from(err: InterviewStoreError) -> Self {
        match err {
            InterviewStoreError::NotFound(id) => CompleteInterviewError::NotFound(id),
            other => CompleteInterviewError::Storage(other.to_string()),
        }
    }
}

impl From<ProfileGeneratorError> for CompleteInterviewError {
    fn from(err: ProfileGeneratorError) -> Self {
        CompleteInterviewError::Generation(err.to_string())
    }
}

/// Handler for the single summary handoff
pub struct CompleteInterviewHandler {
    store: Arc<dyn InterviewStore>,
    generator: Arc<dyn ProfileGenerator>,
}

impl CompleteInterviewHandler {
    pub fn new(store: Arc<dyn InterviewStore>, generator: Arc<dyn ProfileGenerator>) -> Self {
        Self { store, generator }
    }

    pub async fn handle(
        &self,
        cmd: CompleteInterviewCommand,
    ) -> Result<CompleteInterviewResult, CompleteInterviewError> {
        let session = self.store.load(cmd.interview_id).await?;

        if !session.is_complete() {
            return Err(CompleteInterviewError::NotComplete(cmd.interview_id));
        }

        let summary = session.build_summary();
        let profile = self.generator.generate(&summary).await?;

        info!(
            interview_id = %cmd.interview_id,
            answers = session.answers().len(),
            "interview summary handed off"
        );

        Ok(CompleteInterviewResult {
            summary,
            profile,
            answers: session
                .answers()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryInterviewStore, RecordingProfileGenerator};
    use crate::domain::interview::InterviewSession;

    async fn saved_session(
        store: &InMemoryInterviewStore,
        complete: bool,
    ) -> InterviewId {
        let mut session = InterviewSession::new("tax_accounting", Some("Acme Tax LLC"), None);
        if complete {
            session.toggle("known_business").unwrap();
            for _ in 0..5 {
                session.skip_question();
            }
            assert!(session.is_complete());
        }
        store.save(&session).await.unwrap();
        session.id()
    }

    #[tokio::test]
    async fn complete_hands_off_the_summary_exactly_once() {
        let store = Arc::new(InMemoryInterviewStore::new());
        let generator = Arc::new(RecordingProfileGenerator::new());
        let interview_id = saved_session(&store, true).await;
        let handler = CompleteInterviewHandler::new(store, generator.clone());

        let result = handler
            .handle(CompleteInterviewCommand { interview_id })
            .await
            .unwrap();

        assert!(result.summary.contains("business_name: Acme Tax LLC"));
        assert_eq!(generator.handoff_count().await, 1);
        assert_eq!(generator.received_summaries().await, vec![result.summary.clone()]);
        assert_eq!(result.answers.len(), 1);
    }

    #[tokio::test]
    async fn incomplete_interview_is_rejected() {
        let store = Arc::new(InMemoryInterviewStore::new());
        let generator = Arc::new(RecordingProfileGenerator::new());
        let interview_id = saved_session(&store, false).await;
        let handler = CompleteInterviewHandler::new(store, generator.clone());

        let result = handler.handle(CompleteInterviewCommand { interview_id }).await;

        assert!(matches!(result, Err(CompleteInterviewError::NotComplete(_))));
        assert_eq!(generator.handoff_count().await, 0);
    }

    #[tokio::test]
    async fn unknown_interview_returns_not_found() {
        let handler = CompleteInterviewHandler::new(
            Arc::new(InMemoryInterviewStore::new()),
            Arc::new(RecordingProfileGenerator::new()),
        );

        let result = handler
            .handle(CompleteInterviewCommand {
                interview_id: InterviewId::new(),
            })
            .await;

        assert!(matches!(result, Err(CompleteInterviewError::NotFound(_))));
    }
}
