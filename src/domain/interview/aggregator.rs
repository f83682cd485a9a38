//! Answer aggregator - commit-ordered answers and the handoff summary.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

use super::answer::CommittedAnswer;

/// Accumulates committed answers for one interview run and serializes
/// them into the single handoff summary.
///
/// Answers are kept in commit order (interview order), so a transcript
/// reader sees the conversation as it happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerAggregator {
    industry: String,
    answers: Vec<CommittedAnswer>,
}

impl AnswerAggregator {
    /// Creates an empty aggregator for one interview.
    pub fn new(industry: impl Into<String>) -> Self {
        Self {
            industry: industry.into(),
            answers: Vec::new(),
        }
    }

    /// Returns the industry tag this interview configures.
    pub fn industry(&self) -> &str {
        &self.industry
    }

    /// Returns the number of committed answers.
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Returns the committed answer for a field key, if present.
    pub fn find_answer(&self, field_key: &str) -> Option<&CommittedAnswer> {
        self.answers.iter().find(|a| a.field_key == field_key)
    }

    /// Appends a committed answer.
    ///
    /// A second answer for a field key already present in this run is a
    /// caller error, not an update path: it is rejected rather than
    /// silently overwritten, preserving the audit-order invariant.
    ///
    /// # Errors
    ///
    /// - `DuplicateAnswer` if the field key was already committed
    pub fn append_answer(&mut self, answer: CommittedAnswer) -> Result<(), DomainError> {
        if self.find_answer(&answer.field_key).is_some() {
            return Err(DomainError::new(
                ErrorCode::DuplicateAnswer,
                format!("Answer for '{}' was already committed", answer.field_key),
            )
            .with_detail("field_key", answer.field_key.clone()));
        }
        self.answers.push(answer);
        Ok(())
    }

    /// Returns the ordered (field_key, value) pairs for transcript display.
    ///
    /// Empty answers are skipped, matching the summary.
    pub fn answers(&self) -> Vec<(&str, String)> {
        self.answers
            .iter()
            .filter(|a| !a.is_empty())
            .map(|a| (a.field_key.as_str(), a.joined_value()))
            .collect()
    }

    /// Builds the handoff summary consumed by the external generator.
    ///
    /// One line per non-empty answer, in commit order, wrapped with the
    /// fixed instruction preamble.
    pub fn build_summary(&self) -> String {
        let mut summary = format!(
            "A {} business has answered a setup interview for its phone and chat assistant.\n\
             Map each line below to the matching assistant configuration field.\n\n",
            self.industry
        );
        for (field_key, value) in self.answers() {
            summary.push_str(field_key);
            summary.push_str(": ");
            summary.push_str(&value);
            summary.push('\n');
        }
        summary
    }
}
