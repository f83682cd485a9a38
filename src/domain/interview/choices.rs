//! Choice data model - selectable options and per-question interaction rules.

use serde::{Deserialize, Serialize};

use super::answer::CommittedAnswer;
use super::question::Question;

/// One selectable option within a question.
///
/// Immutable once built; the interview never mutates options after the
/// catalog is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Unique within the owning question.
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    /// Icon tag for the rendering surface (e.g. "building", "clock").
    pub icon: String,
    pub disabled: bool,
    pub disabled_reason: Option<String>,
}

impl ChoiceOption {
    /// Creates an enabled option with no description.
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            icon: icon.into(),
            disabled: false,
            disabled_reason: None,
        }
    }

    /// Returns a copy with the given description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns a disabled copy with the reason shown to the user.
    pub fn disabled_with_reason(mut self, reason: impl Into<String>) -> Self {
        self.disabled = true;
        self.disabled_reason = Some(reason.into());
        self
    }
}

/// Interaction rules for one question's choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoicesConfig {
    /// Ordered list; committed labels follow this order.
    pub options: Vec<ChoiceOption>,
    pub multi_select: bool,
    /// Whether the free-text "other" entry is offered.
    pub allow_other: bool,
    pub other_placeholder: Option<String>,
    /// Upper bound on simultaneous selections (multi-select only).
    pub max_selections: Option<usize>,
    /// Progress indicator shown with the question, e.g. "Question 3 of 6".
    pub progress_label: Option<String>,
}

impl ChoicesConfig {
    /// Creates a single-select config over the given options.
    pub fn single_select(options: Vec<ChoiceOption>) -> Self {
        Self {
            options,
            multi_select: false,
            allow_other: false,
            other_placeholder: None,
            max_selections: None,
            progress_label: None,
        }
    }

    /// Creates a multi-select config over the given options.
    pub fn multi_select(options: Vec<ChoiceOption>) -> Self {
        Self {
            options,
            multi_select: true,
            allow_other: false,
            other_placeholder: None,
            max_selections: None,
            progress_label: None,
        }
    }

    /// Enables the free-text "other" entry with a placeholder.
    pub fn with_other(mut self, placeholder: impl Into<String>) -> Self {
        self.allow_other = true;
        self.other_placeholder = Some(placeholder.into());
        self
    }

    /// Caps the number of simultaneous selections.
    pub fn with_max_selections(mut self, max: usize) -> Self {
        self.max_selections = Some(max);
        self
    }

    /// Sets the progress label.
    pub fn with_progress_label(mut self, label: impl Into<String>) -> Self {
        self.progress_label = Some(label.into());
        self
    }

    /// Finds an option by id.
    pub fn find_option(&self, id: &str) -> Option<&ChoiceOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Returns true if an enabled option with this id exists.
    pub fn has_selectable_option(&self, id: &str) -> bool {
        self.find_option(id).map(|o| !o.disabled).unwrap_or(false)
    }

    /// Returns true if this config commits on the first toggle.
    pub fn is_single_select(&self) -> bool {
        !self.multi_select
    }
}

/// How a question is presented to the rendering surface.
///
/// The legacy plain-single-select presentation and the structured
/// config-driven one are distinct variants chosen once per question,
/// rather than being inferred from which optional props are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceRenderMode {
    /// Plain list of labels with at most one selection.
    LegacySingle {
        choices: Vec<String>,
        selected: Option<String>,
    },
    /// Config-driven presentation; a committed question is reconstructed
    /// solely from its `CommittedAnswer`.
    Structured {
        config: ChoicesConfig,
        committed: Option<CommittedAnswer>,
    },
}

impl ChoiceRenderMode {
    /// Selects the render mode for a question.
    ///
    /// Questions that only offer a flat single choice (no free text, no
    /// multi-select) keep the legacy presentation; everything else uses
    /// the structured one.
    pub fn for_question(question: &Question, committed: Option<&CommittedAnswer>) -> Self {
        let config = &question.choices;
        if config.is_single_select() && !config.allow_other {
            ChoiceRenderMode::LegacySingle {
                choices: config.options.iter().map(|o| o.label.clone()).collect(),
                selected: committed.and_then(|a| a.selected_labels.first().cloned()),
            }
        } else {
            ChoiceRenderMode::Structured {
                config: config.clone(),
                committed: committed.cloned(),
            }
        }
    }

    /// Returns the locked display value for a committed question.
    pub fn committed_display(&self) -> Option<String> {
        match self {
            ChoiceRenderMode::LegacySingle { selected, .. } => selected.clone(),
            ChoiceRenderMode::Structured { committed, .. } => {
                committed.as_ref().map(|a| a.joined_value())
            }
        }
    }
}
