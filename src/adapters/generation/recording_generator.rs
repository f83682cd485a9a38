//! Recording Profile Generator Adapter
//!
//! Records every summary handed off and returns a canned profile.
//! Useful for testing and development; the real generation collaborator
//! lives outside this crate.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::ports::{ProfileGenerator, ProfileGeneratorError};

/// Generator that records handoffs instead of calling an external service
#[derive(Debug, Clone)]
pub struct RecordingProfileGenerator {
    received: Arc<Mutex<Vec<String>>>,
}

impl RecordingProfileGenerator {
    /// Create a new recording generator
    pub fn new() -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns every summary received so far, in handoff order
    pub async fn received_summaries(&self) -> Vec<String> {
        self.received.lock().await.clone()
    }

    /// Returns the number of handoffs received
    pub async fn handoff_count(&self) -> usize {
        self.received.lock().await.len()
    }
}

impl Default for RecordingProfileGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileGenerator for RecordingProfileGenerator {
    async fn generate(&self, summary: &str) -> Result<String, ProfileGeneratorError> {
        self.received.lock().await.push(summary.to_string());
        Ok(format!("generated-profile ({} bytes in)", summary.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn generate_records_each_summary_in_order() {
        let generator = RecordingProfileGenerator::new();
        generator.generate("first").await.unwrap();
        generator.generate("second").await.unwrap();

        assert_eq!(generator.handoff_count().await, 2);
        assert_eq!(generator.received_summaries().await, vec!["first", "second"]);
    }
}
