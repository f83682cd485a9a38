//! ApplySelectionHandler - Relay a UI event into the active question

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{DomainError, InterviewId};
use crate::domain::interview::{CommittedAnswer, SelectionView};
use crate::ports::{InterviewStore, InterviewStoreError};

/// A selection event forwarded from the rendering surface
#[derive(Debug, Clone)]
pub enum SelectionEvent {
    /// Toggle a predefined option; commits immediately on single-select
    Toggle { option_id: String },
    /// Activate the free-text "other" entry
    ActivateOther,
    /// Update the free text
    EditOtherText { text: String },
}

/// Command to apply a selection event
#[derive(Debug, Clone)]
pub struct ApplySelectionCommand {
    pub interview_id: InterviewId,
    pub event: SelectionEvent,
}

/// Result of applying a selection event
#[derive(Debug, Clone)]
pub struct ApplySelectionResult {
    /// Render state of the active question after the event, or None when
    /// the event completed the interview's last question
    pub view: Option<SelectionView>,
    /// The frozen answer, when the event committed the question
    pub committed: Option<CommittedAnswer>,
}

/// Error type for applying selection events
#[derive(Debug)]
pub enum ApplySelectionError {
    /// No interview with this ID
    NotFound(InterviewId),
    /// Storage error
    Storage(String),
    /// Domain error
    Domain(DomainError),
}

impl std::fmt::Display for ApplySelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplySelectionError::NotFound(id) => write!(f, "Interview not found: {}", id),
            ApplySelectionError::Storage(err) => write!(f, "Storage error: {}", err),
            ApplySelectionError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ApplySelectionError {}

impl From<DomainError> for ApplySelectionError {
    fn from(err: DomainError) -> Self {
        ApplySelectionError::Domain(err)
    }
}

impl From<InterviewStoreError> for ApplySelectionError {
    fn from(err: InterviewStoreError) -> Self {
        match err {
            InterviewStoreError::NotFound(id) => ApplySelectionError::NotFound(id),
            other => ApplySelectionError::Storage(other.to_string()),
        }
    }
}

/// Handler for selection events on the active question
pub struct ApplySelectionHandler {
    store: Arc<dyn InterviewStore>,
}

impl ApplySelectionHandler {
    pub fn new(store: Arc<dyn InterviewStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: ApplySelectionCommand,
    ) -> Result<ApplySelectionResult, ApplySelectionError> {
        let mut session = self.store.load(cmd.interview_id).await?;

        let committed = match &cmd.event {
            SelectionEvent::Toggle { option_id } => session.toggle(option_id)?,
            SelectionEvent::ActivateOther => {
                session.activate_other();
                None
            }
            SelectionEvent::EditOtherText { text } => {
                session.edit_other_text(text.clone());
                None
            }
        };

        self.store.save(&session).await?;

        debug!(
            interview_id = %cmd.interview_id,
            event = ?cmd.event,
            committed = committed.is_some(),
            "selection event applied"
        );

        Ok(ApplySelectionResult {
            view: session.selection_view(),
            committed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryInterviewStore;
    use crate::application::handlers::interview::{StartInterviewCommand, StartInterviewHandler};

    async fn started_interview(store: Arc<InMemoryInterviewStore>) -> InterviewId {
        StartInterviewHandler::new(store)
            .handle(StartInterviewCommand {
                industry: "tax_accounting".to_string(),
                known_business_name: Some("Acme Tax LLC".to_string()),
                known_agent_name: None,
            })
            .await
            .unwrap()
            .interview_id
    }

    #[tokio::test]
    async fn toggle_on_single_select_commits_and_returns_answer() {
        let store = Arc::new(InMemoryInterviewStore::new());
        let interview_id = started_interview(store.clone()).await;
        let handler = ApplySelectionHandler::new(store);

        let result = handler
            .handle(ApplySelectionCommand {
                interview_id,
                event: SelectionEvent::Toggle {
                    option_id: "known_business".to_string(),
                },
            })
            .await
            .unwrap();

        let committed = result.committed.unwrap();
        assert_eq!(committed.field_key, "business_name");
        assert_eq!(committed.selected_labels, vec!["Acme Tax LLC"]);

        // The next question's fresh view is returned.
        let view = result.view.unwrap();
        assert!(view.selected_ids.is_empty());
        assert!(!view.committed);
    }

    #[tokio::test]
    async fn edit_other_text_persists_across_loads() {
        let store = Arc::new(InMemoryInterviewStore::new());
        let interview_id = started_interview(store.clone()).await;
        let handler = ApplySelectionHandler::new(store.clone());

        handler
            .handle(ApplySelectionCommand {
                interview_id,
                event: SelectionEvent::ActivateOther,
            })
            .await
            .unwrap();
        let result = handler
            .handle(ApplySelectionCommand {
                interview_id,
                event: SelectionEvent::EditOtherText {
                    text: "Fresh Start Accounting".to_string(),
                },
            })
            .await
            .unwrap();

        assert_eq!(result.view.unwrap().other_text, "Fresh Start Accounting");

        let reloaded = store.load(interview_id).await.unwrap();
        assert_eq!(
            reloaded.selection_view().unwrap().other_text,
            "Fresh Start Accounting"
        );
    }

    #[tokio::test]
    async fn stray_toggle_is_a_silent_no_op() {
        let store = Arc::new(InMemoryInterviewStore::new());
        let interview_id = started_interview(store.clone()).await;
        let handler = ApplySelectionHandler::new(store);

        let result = handler
            .handle(ApplySelectionCommand {
                interview_id,
                event: SelectionEvent::Toggle {
                    option_id: "no_such_option".to_string(),
                },
            })
            .await
            .unwrap();

        assert!(result.committed.is_none());
        assert!(result.view.unwrap().selected_ids.is_empty());
    }

    #[tokio::test]
    async fn unknown_interview_returns_not_found() {
        let handler = ApplySelectionHandler::new(Arc::new(InMemoryInterviewStore::new()));

        let result = handler
            .handle(ApplySelectionCommand {
                interview_id: InterviewId::new(),
                event: SelectionEvent::ActivateOther,
            })
            .await;

        assert!(matches!(result, Err(ApplySelectionError::NotFound(_))));
    }
}
