//! Interview session aggregate.
//!
//! One session is one complete run through the fixed six-question catalog
//! for a single business.
//!
//! # Aggregate Boundary
//!
//! The session is the aggregate root that owns the built catalog, the
//! active question's selection machine, and the answer aggregator.
//! - Exactly one question is active at a time; selection events apply to it
//! - A successful commit appends to the aggregator, discards the transient
//!   selection, and advances to the next question
//! - An abandoned (skipped) question never produces a `CommittedAnswer`

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, InterviewId, Timestamp};

use super::aggregator::AnswerAggregator;
use super::answer::CommittedAnswer;
use super::catalog::build_catalog;
use super::choices::ChoiceRenderMode;
use super::question::Question;
use super::selection::{SelectionMachine, SelectionView};

/// Interview session aggregate - one guided setup run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSession {
    /// Unique identifier for this run.
    id: InterviewId,

    /// Industry tag the catalog was built for.
    industry: String,

    /// The fixed six-question catalog, immutable after construction.
    questions: Vec<Question>,

    /// Index of the active question; equals `questions.len()` when done.
    current: usize,

    /// Transient selection state for the active question.
    active: Option<SelectionMachine>,

    /// Committed answers, in commit order.
    aggregator: AnswerAggregator,

    created_at: Timestamp,
    updated_at: Timestamp,
}

impl InterviewSession {
    /// Starts a new interview: builds the catalog and activates question 1.
    pub fn new(
        industry: impl Into<String>,
        known_business_name: Option<&str>,
        known_agent_name: Option<&str>,
    ) -> Self {
        let industry = industry.into();
        let questions = build_catalog(&industry, known_business_name, known_agent_name);
        let active = questions.first().cloned().map(SelectionMachine::new);
        let now = Timestamp::now();
        Self {
            id: InterviewId::new(),
            industry: industry.clone(),
            questions,
            current: 0,
            active,
            aggregator: AnswerAggregator::new(industry),
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> InterviewId {
        self.id
    }

    /// Returns the industry tag.
    pub fn industry(&self) -> &str {
        &self.industry
    }

    /// Returns the full question catalog.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the active question, or None when the interview is done.
    pub fn active_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Returns the 0-based index of the active question.
    pub fn current_index(&self) -> Option<usize> {
        if self.is_complete() {
            None
        } else {
            Some(self.current)
        }
    }

    /// Returns the total number of questions.
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Returns true when every question has been committed or skipped.
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Returns the render state of the active selection, if any.
    pub fn selection_view(&self) -> Option<SelectionView> {
        self.active.as_ref().map(|m| m.view())
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the session was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────
    // Selection events (active question only)
    // ─────────────────────────────────────────────────────────────────────

    /// Toggles a predefined option on the active question.
    ///
    /// Single-select questions commit immediately; the committed answer is
    /// returned after being recorded. Rejected toggles are silent no-ops
    /// returning `Ok(None)`.
    pub fn toggle(&mut self, option_id: &str) -> Result<Option<CommittedAnswer>, DomainError> {
        let committed = match self.active.as_mut() {
            Some(machine) => machine.toggle(option_id),
            None => return Ok(None),
        };
        self.touch();
        match committed {
            Some(answer) => self.record_and_advance(answer).map(Some),
            None => Ok(None),
        }
    }

    /// Activates the free-text entry on the active question.
    pub fn activate_other(&mut self) {
        if let Some(machine) = self.active.as_mut() {
            machine.activate_other();
            self.touch();
        }
    }

    /// Updates the free text on the active question.
    pub fn edit_other_text(&mut self, text: impl Into<String>) {
        if let Some(machine) = self.active.as_mut() {
            machine.edit_other_text(text);
            self.touch();
        }
    }

    /// Commits the active question's selection.
    ///
    /// Rejected commits (empty selection, no usable free text) are silent
    /// no-ops returning `Ok(None)`.
    pub fn commit(&mut self) -> Result<Option<CommittedAnswer>, DomainError> {
        let committed = match self.active.as_mut() {
            Some(machine) => machine.commit(),
            None => return Ok(None),
        };
        match committed {
            Some(answer) => self.record_and_advance(answer).map(Some),
            None => Ok(None),
        }
    }

    /// Abandons the active question and advances.
    ///
    /// The question never produces a `CommittedAnswer` and is excluded
    /// from the summary.
    pub fn skip_question(&mut self) {
        if !self.is_complete() {
            self.advance();
            self.touch();
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the render mode for a question by catalog index.
    ///
    /// Committed questions are reconstructed solely from their
    /// `CommittedAnswer`, never from discarded selection state.
    pub fn render_question(&self, index: usize) -> Option<ChoiceRenderMode> {
        let question = self.questions.get(index)?;
        let committed = self.aggregator.find_answer(&question.field_key);
        Some(ChoiceRenderMode::for_question(question, committed))
    }

    /// Returns the ordered (field_key, value) pairs committed so far.
    pub fn answers(&self) -> Vec<(&str, String)> {
        self.aggregator.answers()
    }

    /// Builds the handoff summary from the answers committed so far.
    pub fn build_summary(&self) -> String {
        self.aggregator.build_summary()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────

    fn record_and_advance(
        &mut self,
        answer: CommittedAnswer,
    ) -> Result<CommittedAnswer, DomainError> {
        self.aggregator.append_answer(answer.clone())?;
        self.advance();
        self.touch();
        Ok(answer)
    }

    fn advance(&mut self) {
        self.current += 1;
        self.active = self.questions.get(self.current).cloned().map(SelectionMachine::new);
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
