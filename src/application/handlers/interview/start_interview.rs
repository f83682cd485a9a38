//! StartInterviewHandler - Begin a guided setup interview

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::InterviewId;
use crate::domain::interview::{InterviewSession, Question};
use crate::ports::{InterviewStore, InterviewStoreError};

/// Command to start an interview
#[derive(Debug, Clone)]
pub struct StartInterviewCommand {
    pub industry: String,
    pub known_business_name: Option<String>,
    pub known_agent_name: Option<String>,
}

/// Result of starting an interview
#[derive(Debug, Clone)]
pub struct StartInterviewResult {
    pub interview_id: InterviewId,
    pub first_question: Question,
    pub total_questions: usize,
}

/// Error type for starting an interview
#[derive(Debug)]
pub enum StartInterviewError {
    /// Storage error
    Storage(String),
}

impl std::fmt::Display for StartInterviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartInterviewError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for StartInterviewError {}

impl From<InterviewStoreError> for StartInterviewError {
    fn from(err: InterviewStoreError) -> Self {
        StartInterviewError::Storage(err.to_string())
    }
}

/// Handler for starting interviews
pub struct StartInterviewHandler {
    store: Arc<dyn InterviewStore>,
}

impl StartInterviewHandler {
    pub fn new(store: Arc<dyn InterviewStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: StartInterviewCommand,
    ) -> Result<StartInterviewResult, StartInterviewError> {
        let session = InterviewSession::new(
            cmd.industry.clone(),
            cmd.known_business_name.as_deref(),
            cmd.known_agent_name.as_deref(),
        );

        let first_question = session
            .active_question()
            .cloned()
            .expect("a new interview always has an active question");
        let total_questions = session.total_questions();
        let interview_id = session.id();

        self.store.save(&session).await?;

        info!(
            interview_id = %interview_id,
            industry = %cmd.industry,
            "interview started"
        );

        Ok(StartInterviewResult {
            interview_id,
            first_question,
            total_questions,
        })
    }
}
