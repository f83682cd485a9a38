//! Interview use case handlers.
//!
//! One handler per use case: starting an interview, applying selection
//! events to the active question, committing an answer, and completing
//! the interview (the single summary handoff).

mod apply_selection;
mod commit_answer;
mod complete_interview;
mod start_interview;

pub use apply_selection::{
    ApplySelectionCommand, ApplySelectionError, ApplySelectionHandler, ApplySelectionResult,
    SelectionEvent,
};
pub use commit_answer::{
    CommitAnswerCommand, CommitAnswerError, CommitAnswerHandler, CommitAnswerResult,
};
pub use complete_interview::{
    CompleteInterviewCommand, CompleteInterviewError, CompleteInterviewHandler,
    CompleteInterviewResult,
};
pub use start_interview::{
    StartInterviewCommand, StartInterviewError, StartInterviewHandler, StartInterviewResult,
};
