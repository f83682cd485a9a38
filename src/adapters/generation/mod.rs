//! Generation adapters.

mod recording_generator;

pub use recording_generator::RecordingProfileGenerator;
