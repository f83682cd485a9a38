//! Ports - interfaces to external collaborators.

mod interview_store;
mod profile_generator;

pub use interview_store::{InterviewStore, InterviewStoreError};
pub use profile_generator::{ProfileGenerator, ProfileGeneratorError};
