//! Question lifecycle state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The lifecycle state of one interview question.
///
/// - `Unanswered`: no interaction yet
/// - `InProgress`: at least one interaction recorded
/// - `Committed`: frozen, read-only; no transition ever leaves it
///
/// A single-select toggle commits directly from `Unanswered`, with no
/// intermediate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuestionState {
    #[default]
    Unanswered,
    InProgress,
    Committed,
}

impl QuestionState {
    /// Returns true if the question still accepts selection events.
    pub fn accepts_input(&self) -> bool {
        !matches!(self, Self::Committed)
    }

    /// Returns true if this is the terminal state.
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed)
    }
}

impl StateMachine for QuestionState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use QuestionState::*;
        matches!(
            (self, target),
            // First interaction
            (Unanswered, InProgress) |
            // Confirm after one or more interactions
            (InProgress, Committed) |
            // Single-select toggle commits immediately
            (Unanswered, Committed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use QuestionState::*;
        match self {
            Unanswered => vec![InProgress, Committed],
            InProgress => vec![Committed],
            Committed => vec![],
        }
    }
}
