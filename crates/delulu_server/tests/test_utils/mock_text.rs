//! Mock text generator for testing.

use async_trait::async_trait;
use delulu_core::StructuredRequest;
use delulu_error::{GenerationError, GenerationErrorKind, GenerationResult};
use delulu_interface::TextGenerator;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum TextBehavior {
    /// Always return the given text
    Success(String),
    /// Always return the specified error
    Error(GenerationErrorKind),
}

/// Mock text generator that records every request it receives.
pub struct MockTextGenerator {
    behavior: TextBehavior,
    requests: Arc<Mutex<Vec<StructuredRequest>>>,
}

impl MockTextGenerator {
    /// Create a mock that always answers with `text`.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self {
            behavior: TextBehavior::Success(text.into()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that always fails with `error`.
    pub fn new_error(error: GenerationErrorKind) -> Self {
        Self {
            behavior: TextBehavior::Error(error),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of calls made so far.
    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The most recent request.
    #[allow(dead_code)]
    pub fn last_request(&self) -> Option<StructuredRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate_json(&self, request: &StructuredRequest) -> GenerationResult<String> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.behavior {
            TextBehavior::Success(text) => Ok(text.clone()),
            TextBehavior::Error(kind) => Err(GenerationError::new(kind.clone())),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-text"
    }
}
