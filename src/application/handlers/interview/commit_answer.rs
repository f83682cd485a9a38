//! CommitAnswerHandler - Confirm the active question's selection

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, InterviewId};
use crate::domain::interview::{CommittedAnswer, Question};
use crate::ports::{InterviewStore, InterviewStoreError};

/// Command to commit the active question
#[derive(Debug, Clone)]
pub struct CommitAnswerCommand {
    pub interview_id: InterviewId,
}

/// Result of a commit attempt
#[derive(Debug, Clone)]
pub struct CommitAnswerResult {
    /// The frozen answer; None when the commit was rejected (empty
    /// selection and no usable free text) and the question stays active
    pub committed: Option<CommittedAnswer>,
    /// The next question to present, when the commit advanced the
    /// interview and questions remain
    pub next_question: Option<Question>,
    /// True once every question has been committed or skipped
    pub interview_complete: bool,
}

/// Error type for committing answers
#[derive(Debug)]
pub enum CommitAnswerError {
    /// No interview with this ID
    NotFound(InterviewId),
    /// Storage error
    Storage(String),
    /// Domain error
    Domain(DomainError),
}

impl std::fmt::Display for CommitAnswerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommitAnswerError::NotFound(id) => write!(f, "Interview not found: {}", id),
            CommitAnswerError::Storage(err) => write!(f, "Storage error: {}", err),
            CommitAnswerError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommitAnswerError {}

impl From<DomainError> for CommitAnswerError {
    fn from(err: DomainError) -> Self {
        CommitAnswerError::Domain(err)
    }
}

impl From<InterviewStoreError> for CommitAnswerError {
    fn from(err: InterviewStoreError) -> Self {
        match err {
            InterviewStoreError::NotFound(id) => CommitAnswerError::NotFound(id),
            other => CommitAnswerError::Storage(other.to_string()),
        }
    }
}

/// Handler for committing the active question
pub struct CommitAnswerHandler {
    store: Arc<dyn InterviewStore>,
}

impl CommitAnswerHandler {
    pub fn new(store: Arc<dyn InterviewStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: CommitAnswerCommand,
    ) -> Result<CommitAnswerResult, CommitAnswerError> {
        let mut session = self.store.load(cmd.interview_id).await?;

        let committed = session.commit()?;
        self.store.save(&session).await?;

        if let Some(answer) = &committed {
            info!(
                interview_id = %cmd.interview_id,
                field_key = %answer.field_key,
                "answer committed"
            );
        }

        Ok(CommitAnswerResult {
            committed,
            next_question: session.active_question().cloned(),
            interview_complete: session.is_complete(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryInterviewStore;
    use crate::application::handlers::interview::{
        ApplySelectionCommand, ApplySelectionHandler, SelectionEvent, StartInterviewCommand,
        StartInterviewHandler,
    };

    async fn started_interview(store: Arc<InMemoryInterviewStore>) -> InterviewId {
        StartInterviewHandler::new(store)
            .handle(StartInterviewCommand {
                industry: "tax_accounting".to_string(),
                known_business_name: None,
                known_agent_name: None,
            })
            .await
            .unwrap()
            .interview_id
    }

    async fn apply(
        store: Arc<InMemoryInterviewStore>,
        interview_id: InterviewId,
        event: SelectionEvent,
    ) {
        ApplySelectionHandler::new(store)
            .handle(ApplySelectionCommand {
                interview_id,
                event,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn commit_with_free_text_advances_to_next_question() {
        let store = Arc::new(InMemoryInterviewStore::new());
        let interview_id = started_interview(store.clone()).await;

        // Business name via free text.
        apply(store.clone(), interview_id, SelectionEvent::ActivateOther).await;
        apply(
            store.clone(),
            interview_id,
            SelectionEvent::EditOtherText {
                text: "Acme Tax LLC".to_string(),
            },
        )
        .await;

        let result = CommitAnswerHandler::new(store)
            .handle(CommitAnswerCommand { interview_id })
            .await
            .unwrap();

        let committed = result.committed.unwrap();
        assert_eq!(committed.field_key, "business_name");
        assert_eq!(committed.other_text.as_deref(), Some("Acme Tax LLC"));
        assert_eq!(result.next_question.unwrap().id, "q_agent_name");
        assert!(!result.interview_complete);
    }

    #[tokio::test]
    async fn rejected_commit_keeps_the_question_active() {
        let store = Arc::new(InMemoryInterviewStore::new());
        let interview_id = started_interview(store.clone()).await;

        let result = CommitAnswerHandler::new(store)
            .handle(CommitAnswerCommand { interview_id })
            .await
            .unwrap();

        assert!(result.committed.is_none());
        assert_eq!(result.next_question.unwrap().id, "q_business_name");
        assert!(!result.interview_complete);
    }

    #[tokio::test]
    async fn unknown_interview_returns_not_found() {
        let handler = CommitAnswerHandler::new(Arc::new(InMemoryInterviewStore::new()));

        let result = handler
            .handle(CommitAnswerCommand {
                interview_id: InterviewId::new(),
            })
            .await;

        assert!(matches!(result, Err(CommitAnswerError::NotFound(_))));
    }
}
