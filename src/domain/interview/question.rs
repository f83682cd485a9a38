//! Question record and the fixed interview slot sequence.

use serde::{Deserialize, Serialize};

use super::choices::ChoicesConfig;

/// One interview question. Built once per interview; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    /// Unique output key, e.g. "services_offered".
    pub field_key: String,
    pub prompt_text: String,
    pub choices: ChoicesConfig,
}

impl Question {
    /// Creates a new question.
    pub fn new(
        id: impl Into<String>,
        field_key: impl Into<String>,
        prompt_text: impl Into<String>,
        choices: ChoicesConfig,
    ) -> Self {
        Self {
            id: id.into(),
            field_key: field_key.into(),
            prompt_text: prompt_text.into(),
            choices,
        }
    }
}

/// The six fixed interview slots, in interview order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSlot {
    BusinessName,
    AgentName,
    Services,
    Tone,
    CallReasons,
    Hours,
}

impl QuestionSlot {
    /// The canonical interview order.
    pub const ORDER: [QuestionSlot; 6] = [
        QuestionSlot::BusinessName,
        QuestionSlot::AgentName,
        QuestionSlot::Services,
        QuestionSlot::Tone,
        QuestionSlot::CallReasons,
        QuestionSlot::Hours,
    ];

    /// Returns all slots in order.
    pub fn all() -> &'static [QuestionSlot; 6] {
        &Self::ORDER
    }

    /// Returns the 0-based position of this slot in the interview.
    #[inline]
    pub fn order_index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|&s| s == self)
            .expect("All QuestionSlot variants must be in ORDER")
    }

    /// Returns the next slot, or None after the last question.
    pub fn next(self) -> Option<QuestionSlot> {
        Self::ORDER.get(self.order_index() + 1).copied()
    }

    /// Returns the "Question i of 6" progress label for this slot.
    pub fn progress_label(self) -> String {
        format!("Question {} of {}", self.order_index() + 1, Self::ORDER.len())
    }

    /// The question id used for this slot.
    pub fn question_id(self) -> &'static str {
        match self {
            QuestionSlot::BusinessName => "q_business_name",
            QuestionSlot::AgentName => "q_agent_name",
            QuestionSlot::Services => "q_services",
            QuestionSlot::Tone => "q_tone",
            QuestionSlot::CallReasons => "q_call_reasons",
            QuestionSlot::Hours => "q_hours",
        }
    }

    /// The output field key this slot's answer is recorded under.
    pub fn field_key(self) -> &'static str {
        match self {
            QuestionSlot::BusinessName => "business_name",
            QuestionSlot::AgentName => "agent_name",
            QuestionSlot::Services => "services_offered",
            QuestionSlot::Tone => "agent_tone",
            QuestionSlot::CallReasons => "call_reasons",
            QuestionSlot::Hours => "operating_hours",
        }
    }
}
