//! Adapters - implementations of the ports.

pub mod generation;
pub mod storage;

pub use generation::RecordingProfileGenerator;
pub use storage::InMemoryInterviewStore;
