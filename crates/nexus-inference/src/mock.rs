//! Scripted generation backend for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use nexus_core::{Error, GenerationBackend, Result};

/// In-memory backend returning pre-scripted responses in FIFO order.
///
/// An exhausted script produces an `Error::Inference`, which doubles as a
/// stand-in for provider failures in error-path tests.
#[derive(Debug, Default)]
pub struct MockBackend {
    responses: Mutex<VecDeque<String>>,
}

impl MockBackend {
    /// Backend with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend scripted with a single response.
    pub fn with_response(response: impl Into<String>) -> Self {
        let backend = Self::new();
        backend.push_response(response);
        backend
    }

    /// Append a response to the script.
    pub fn push_response(&self, response: impl Into<String>) {
        self.responses
            .lock()
            .expect("mock script lock poisoned")
            .push_back(response.into());
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.responses
            .lock()
            .expect("mock script lock poisoned")
            .pop_front()
            .ok_or_else(|| Error::Inference("mock backend has no scripted response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn responses_come_back_in_order() {
        let backend = MockBackend::new();
        backend.push_response("first");
        backend.push_response("second");

        assert_eq!(backend.generate("p").await.unwrap(), "first");
        assert_eq!(backend.generate("p").await.unwrap(), "second");
        assert!(backend.generate("p").await.is_err());
    }
}
