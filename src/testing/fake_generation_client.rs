use std::sync::{Arc, Mutex};

use crate::domain::GenerationRequest;
use crate::ports::{CallFailure, GenerationClient};

/// Generation client that records every request and replays a canned reply.
#[derive(Clone)]
pub struct FakeGenerationClient {
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
    reply: Result<String, CallFailure>,
}

impl FakeGenerationClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), reply: Ok(text.into()) }
    }

    pub fn failing(failure: CallFailure) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), reply: Err(failure) }
    }

    pub fn recorded_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, CallFailure> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone()
    }
}
