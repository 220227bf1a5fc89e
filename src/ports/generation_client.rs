//! Generation backend port definition.

use crate::domain::GenerationRequest;

use super::CallFailure;

/// Port for the text-generation backend.
pub trait GenerationClient {
    /// Issue one blocking generation call and return the raw generated text.
    fn generate(&self, request: &GenerationRequest) -> Result<String, CallFailure>;
}
