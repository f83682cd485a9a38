//! Interview domain module.
//!
//! Implements the guided setup interview: the fixed six-question catalog,
//! the per-question selection state machine, and the answer aggregator
//! that produces the handoff summary.

mod aggregator;
mod answer;
mod catalog;
mod choices;
mod question;
mod selection;
mod session;
mod state;

pub use aggregator::AnswerAggregator;
pub use answer::CommittedAnswer;
pub use catalog::{build_catalog, call_reasons_for_industry, services_for_industry, DEFAULT_INDUSTRY};
pub use choices::{ChoiceOption, ChoiceRenderMode, ChoicesConfig};
pub use question::{Question, QuestionSlot};
pub use selection::{SelectionMachine, SelectionView};
pub use session::InterviewSession;
pub use state::QuestionState;
