//! CommittedAnswer - the frozen result of one question.

use serde::{Deserialize, Serialize};

/// The frozen, never-mutated result of a question once finalized.
///
/// Created exactly once per question on commit. A committed question's
/// display is reconstructed solely from this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedAnswer {
    pub field_key: String,
    /// Predefined option labels, in the config's option order.
    pub selected_labels: Vec<String>,
    /// Trimmed free-text entry, if the user typed one.
    pub other_text: Option<String>,
}

impl CommittedAnswer {
    /// Creates a committed answer, trimming and dropping empty other-text.
    pub fn new(
        field_key: impl Into<String>,
        selected_labels: Vec<String>,
        other_text: Option<String>,
    ) -> Self {
        let other_text = other_text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        Self {
            field_key: field_key.into(),
            selected_labels,
            other_text,
        }
    }

    /// Returns true if the answer carries no labels and no free text.
    pub fn is_empty(&self) -> bool {
        self.selected_labels.is_empty() && self.other_text.is_none()
    }

    /// Joins the answer into one display value.
    ///
    /// Predefined labels precede free text, all joined with ", ".
    pub fn joined_value(&self) -> String {
        let mut parts: Vec<&str> = self.selected_labels.iter().map(String::as_str).collect();
        if let Some(other) = &self.other_text {
            parts.push(other);
        }
        parts.join(", ")
    }
}
