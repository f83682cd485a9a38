//! Selection state machine for the active question.
//!
//! Owns the transient selection (checked options, free-text "other") and
//! governs the transition to a frozen `CommittedAnswer`. Every rejected
//! transition is a silent no-op: an interactive flow must never fault on a
//! stray click.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

use super::answer::CommittedAnswer;
use super::question::Question;
use super::state::QuestionState;

/// Render state exposed after every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionView {
    pub selected_ids: Vec<String>,
    pub other_active: bool,
    pub other_text: String,
    pub committed: bool,
}

/// Per-question selection machine.
///
/// Exists only while its question is being answered; once committed the
/// question's display is reconstructed from the emitted `CommittedAnswer`,
/// never from this transient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionMachine {
    question: Question,
    state: QuestionState,
    selected_ids: BTreeSet<String>,
    other_active: bool,
    other_text: String,
}

impl SelectionMachine {
    /// Creates the machine for a question, in `Unanswered` state.
    pub fn new(question: Question) -> Self {
        Self {
            question,
            state: QuestionState::Unanswered,
            selected_ids: BTreeSet::new(),
            other_active: false,
            other_text: String::new(),
        }
    }

    /// Returns the question being answered.
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> QuestionState {
        self.state
    }

    /// Returns the current render state.
    pub fn view(&self) -> SelectionView {
        SelectionView {
            selected_ids: self.selected_ids.iter().cloned().collect(),
            other_active: self.other_active,
            other_text: self.other_text.clone(),
            committed: self.state.is_committed(),
        }
    }

    /// Toggles a predefined option.
    ///
    /// Single-select configs commit immediately with exactly that option,
    /// with no intermediate state. Multi-select configs add or remove the
    /// id; adding is rejected at `max_selections` capacity. Unknown and
    /// disabled ids are no-ops, which keeps `selected_ids` a subset of the
    /// question's option ids.
    pub fn toggle(&mut self, option_id: &str) -> Option<CommittedAnswer> {
        if !self.state.accepts_input() {
            return None;
        }
        let option = match self.question.choices.find_option(option_id) {
            Some(o) if !o.disabled => o.clone(),
            _ => return None,
        };

        if self.question.choices.is_single_select() {
            let answer =
                CommittedAnswer::new(self.question.field_key.clone(), vec![option.label], None);
            self.freeze();
            return Some(answer);
        }

        if self.selected_ids.contains(option_id) {
            self.selected_ids.remove(option_id);
        } else {
            if let Some(max) = self.question.choices.max_selections {
                if self.selected_ids.len() >= max {
                    return None;
                }
            }
            self.selected_ids.insert(option_id.to_string());
        }
        self.mark_in_progress();
        None
    }

    /// Activates the free-text entry. Does not itself commit.
    pub fn activate_other(&mut self) {
        if !self.state.accepts_input() || !self.question.choices.allow_other {
            return;
        }
        self.other_active = true;
        self.mark_in_progress();
    }

    /// Updates the free text while the "other" entry is active.
    pub fn edit_other_text(&mut self, text: impl Into<String>) {
        if !self.state.accepts_input() || !self.other_active {
            return;
        }
        self.other_text = text.into();
        self.mark_in_progress();
    }

    /// Commits the current selection, emitting the frozen answer.
    ///
    /// Multi-select: rejected unless at least one option is selected or a
    /// usable free text was typed. Single-select configs normally commit
    /// via `toggle`; here `commit` is the Enter shortcut, which uses only
    /// the free text.
    pub fn commit(&mut self) -> Option<CommittedAnswer> {
        if !self.state.accepts_input() {
            return None;
        }

        if self.question.choices.is_single_select() {
            // Enter shortcut for single-select-with-free-text configs.
            let other = self.usable_other_text()?;
            let answer = CommittedAnswer::new(self.question.field_key.clone(), vec![], Some(other));
            self.freeze();
            return Some(answer);
        }

        let other = self.usable_other_text();
        if self.selected_ids.is_empty() && other.is_none() {
            return None;
        }

        // Labels follow the config's option order, not click order.
        let labels: Vec<String> = self
            .question
            .choices
            .options
            .iter()
            .filter(|o| self.selected_ids.contains(&o.id))
            .map(|o| o.label.clone())
            .collect();

        let answer = CommittedAnswer::new(self.question.field_key.clone(), labels, other);
        self.freeze();
        Some(answer)
    }

    fn usable_other_text(&self) -> Option<String> {
        if !self.other_active {
            return None;
        }
        let trimmed = self.other_text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn mark_in_progress(&mut self) {
        if self.state == QuestionState::Unanswered
            && self.state.can_transition_to(&QuestionState::InProgress)
        {
            self.state = QuestionState::InProgress;
        }
    }

    fn freeze(&mut self) {
        debug_assert!(self.state.can_transition_to(&QuestionState::Committed));
        self.state = QuestionState::Committed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interview::choices::{ChoiceOption, ChoicesConfig};

    fn options(ids: &[(&str, &str)]) -> Vec<ChoiceOption> {
        ids.iter()
            .map(|(id, label)| ChoiceOption::new(*id, *label, "star"))
            .collect()
    }

    fn multi_question(max: Option<usize>) -> Question {
        let mut config = ChoicesConfig::multi_select(options(&[
            ("a", "Alpha"),
            ("b", "Beta"),
            ("c", "Gamma"),
        ]))
        .with_other("Something else...");
        if let Some(max) = max {
            config = config.with_max_selections(max);
        }
        Question::new("q_multi", "multi_field", "Pick several", config)
    }

    fn single_question() -> Question {
        let config = ChoicesConfig::single_select(options(&[
            ("professional", "Professional"),
            ("friendly", "Friendly & Warm"),
        ]))
        .with_other("Describe it...");
        Question::new("q_single", "single_field", "Pick one", config)
    }

    mod single_select {
        use super::*;

        #[test]
        fn toggle_commits_immediately_with_that_label() {
            let mut machine = SelectionMachine::new(single_question());
            let answer = machine.toggle("professional").expect("should commit");

            assert_eq!(answer.selected_labels, vec!["Professional"]);
            assert!(answer.other_text.is_none());
            assert_eq!(machine.state(), QuestionState::Committed);
        }

        #[test]
        fn toggle_after_commit_is_a_no_op() {
            let mut machine = SelectionMachine::new(single_question());
            machine.toggle("professional").unwrap();

            assert!(machine.toggle("friendly").is_none());
            assert_eq!(machine.state(), QuestionState::Committed);
        }

        #[test]
        fn unknown_option_id_is_a_no_op() {
            let mut machine = SelectionMachine::new(single_question());
            assert!(machine.toggle("nonexistent").is_none());
            assert_eq!(machine.state(), QuestionState::Unanswered);
        }

        #[test]
        fn enter_shortcut_commits_with_free_text_only() {
            let mut machine = SelectionMachine::new(single_question());
            machine.activate_other();
            machine.edit_other_text("Dana");

            let answer = machine.commit().expect("should commit");
            assert!(answer.selected_labels.is_empty());
            assert_eq!(answer.other_text.as_deref(), Some("Dana"));
            assert_eq!(machine.state(), QuestionState::Committed);
        }

        #[test]
        fn enter_shortcut_rejected_without_usable_text() {
            let mut machine = SelectionMachine::new(single_question());
            machine.activate_other();
            machine.edit_other_text("   ");

            assert!(machine.commit().is_none());
            assert_eq!(machine.state(), QuestionState::InProgress);
        }

        #[test]
        fn enter_shortcut_rejected_when_other_not_active() {
            let mut machine = SelectionMachine::new(single_question());
            assert!(machine.commit().is_none());
            assert_eq!(machine.state(), QuestionState::Unanswered);
        }
    }

    mod multi_select {
        use super::*;

        #[test]
        fn toggle_adds_and_removes_ids() {
            let mut machine = SelectionMachine::new(multi_question(None));
            machine.toggle("a");
            machine.toggle("b");
            assert_eq!(machine.view().selected_ids, vec!["a", "b"]);

            machine.toggle("a");
            assert_eq!(machine.view().selected_ids, vec!["b"]);
        }

        #[test]
        fn first_toggle_moves_to_in_progress() {
            let mut machine = SelectionMachine::new(multi_question(None));
            assert_eq!(machine.state(), QuestionState::Unanswered);
            machine.toggle("a");
            assert_eq!(machine.state(), QuestionState::InProgress);
        }

        #[test]
        fn adding_beyond_max_selections_is_rejected() {
            let mut machine = SelectionMachine::new(multi_question(Some(2)));
            machine.toggle("a");
            machine.toggle("b");
            machine.toggle("c");

            assert_eq!(machine.view().selected_ids.len(), 2);
            assert_eq!(machine.view().selected_ids, vec!["a", "b"]);
        }

        #[test]
        fn removing_at_capacity_still_works() {
            let mut machine = SelectionMachine::new(multi_question(Some(2)));
            machine.toggle("a");
            machine.toggle("b");
            machine.toggle("a");

            assert_eq!(machine.view().selected_ids, vec!["b"]);

            machine.toggle("c");
            assert_eq!(machine.view().selected_ids, vec!["b", "c"]);
        }

        #[test]
        fn commit_with_empty_selection_is_a_no_op() {
            let mut machine = SelectionMachine::new(multi_question(None));
            machine.toggle("a");
            machine.toggle("a");

            assert!(machine.commit().is_none());
            assert_eq!(machine.state(), QuestionState::InProgress);
        }

        #[test]
        fn commit_labels_follow_option_order_not_click_order() {
            let mut machine = SelectionMachine::new(multi_question(None));
            machine.toggle("c");
            machine.toggle("a");

            let answer = machine.commit().expect("should commit");
            assert_eq!(answer.selected_labels, vec!["Alpha", "Gamma"]);
        }

        #[test]
        fn commit_includes_usable_other_text_after_labels() {
            let mut machine = SelectionMachine::new(multi_question(None));
            machine.toggle("a");
            machine.activate_other();
            machine.edit_other_text("  Custom thing  ");

            let answer = machine.commit().expect("should commit");
            assert_eq!(answer.selected_labels, vec!["Alpha"]);
            assert_eq!(answer.other_text.as_deref(), Some("Custom thing"));
            assert_eq!(answer.joined_value(), "Alpha, Custom thing");
        }

        #[test]
        fn commit_with_only_other_text_succeeds() {
            let mut machine = SelectionMachine::new(multi_question(None));
            machine.activate_other();
            machine.edit_other_text("Just this");

            let answer = machine.commit().expect("should commit");
            assert!(answer.selected_labels.is_empty());
            assert_eq!(answer.other_text.as_deref(), Some("Just this"));
        }

        #[test]
        fn second_commit_is_a_no_op() {
            let mut machine = SelectionMachine::new(multi_question(None));
            machine.toggle("a");
            machine.commit().unwrap();

            assert!(machine.commit().is_none());
        }
    }

    mod other_text {
        use super::*;

        #[test]
        fn edit_without_activation_is_a_no_op() {
            let mut machine = SelectionMachine::new(multi_question(None));
            machine.edit_other_text("ignored");

            assert_eq!(machine.view().other_text, "");
            assert!(!machine.view().other_active);
        }

        #[test]
        fn activate_other_does_not_commit() {
            let mut machine = SelectionMachine::new(single_question());
            machine.activate_other();

            assert_eq!(machine.state(), QuestionState::InProgress);
            assert!(machine.view().other_active);
            assert!(!machine.view().committed);
        }

        #[test]
        fn edit_after_commit_is_a_no_op() {
            let mut machine = SelectionMachine::new(multi_question(None));
            machine.activate_other();
            machine.edit_other_text("before");
            machine.commit().unwrap();

            machine.edit_other_text("after");
            assert_eq!(machine.view().other_text, "before");
        }

        #[test]
        fn activate_other_rejected_when_not_allowed() {
            let config = ChoicesConfig::multi_select(options(&[("a", "Alpha")]));
            let question = Question::new("q", "f", "Pick", config);
            let mut machine = SelectionMachine::new(question);

            machine.activate_other();
            assert!(!machine.view().other_active);
            assert_eq!(machine.state(), QuestionState::Unanswered);
        }
    }

    mod view {
        use super::*;

        #[test]
        fn initial_view_is_empty_and_uncommitted() {
            let machine = SelectionMachine::new(multi_question(None));
            let view = machine.view();

            assert!(view.selected_ids.is_empty());
            assert!(!view.other_active);
            assert_eq!(view.other_text, "");
            assert!(!view.committed);
        }

        #[test]
        fn view_reflects_commit() {
            let mut machine = SelectionMachine::new(single_question());
            machine.toggle("friendly");
            assert!(machine.view().committed);
        }
    }

    mod invariants {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Capacity holds at every point, not only at commit, under
            /// arbitrary toggle sequences over known and unknown ids.
            #[test]
            fn selection_never_exceeds_max(toggles in proptest::collection::vec(0usize..5, 0..40)) {
                let ids = ["a", "b", "c", "d", "zz_unknown"];
                let question = Question::new(
                    "q_prop",
                    "prop_field",
                    "Pick",
                    ChoicesConfig::multi_select(options(&[
                        ("a", "A"),
                        ("b", "B"),
                        ("c", "C"),
                        ("d", "D"),
                    ]))
                    .with_max_selections(2),
                );
                let mut machine = SelectionMachine::new(question);

                for idx in toggles {
                    machine.toggle(ids[idx]);
                    let view = machine.view();
                    prop_assert!(view.selected_ids.len() <= 2);
                    prop_assert!(view.selected_ids.iter().all(|id| id != "zz_unknown"));
                }
            }
        }
    }
}
