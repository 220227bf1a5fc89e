//! Request dispatcher.

use tracing::debug;

use crate::domain::{AppError, sanitize};
use crate::ports::GenerationClient;

use super::{Generated, PreparedRequest};

/// Send a prepared request once and sanitize the reply.
///
/// Backend failures become `AppError::Generation` carrying the mode's label.
/// There is no retry.
pub fn dispatch<G>(generator: &G, prepared: PreparedRequest) -> Result<Generated, AppError>
where
    G: GenerationClient + ?Sized,
{
    let PreparedRequest { request, subject, source_data } = prepared;
    let label = request.mode.profile().error_label;

    let raw = generator.generate(&request).map_err(|failure| {
        debug!(mode = %request.mode, status = ?failure.status, "Generation call failed");
        AppError::Generation { label, message: failure.message, status: failure.status }
    })?;

    let content = sanitize(&raw, request.mode);
    let artifact = subject.artifact(content.clone());
    Ok(Generated { mode: request.mode, content, artifact, source_data })
}
