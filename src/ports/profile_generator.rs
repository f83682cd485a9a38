//! Profile Generator Port - the handoff seam.
//!
//! The interview summary is delivered here exactly once per completed
//! interview; the generation step (and any retry policy it needs) lives
//! entirely behind this port. The core never invokes an inference API.

use async_trait::async_trait;

/// Errors reported by the external generation collaborator
#[derive(Debug, thiserror::Error)]
pub enum ProfileGeneratorError {
    #[error("Generator rejected the summary: {0}")]
    Rejected(String),

    #[error("Generator unavailable: {0}")]
    Unavailable(String),
}

/// Port for the external step that turns the interview summary into a
/// final assistant configuration
#[async_trait]
pub trait ProfileGenerator: Send + Sync {
    /// Generate an assistant profile from the handoff summary.
    ///
    /// # Errors
    /// Returns `ProfileGeneratorError` if the collaborator fails; the
    /// caller does not retry
    async fn generate(&self, summary: &str) -> Result<String, ProfileGeneratorError>;
}
