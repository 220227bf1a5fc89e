use thiserror::Error;

/// Failure of a single call to an external HTTP collaborator.
///
/// `status` is set when the collaborator answered with a non-success status;
/// it is `None` for transport failures and unreadable bodies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CallFailure {
    pub message: String,
    pub status: Option<u16>,
}

impl CallFailure {
    pub fn transport(message: impl Into<String>) -> Self {
        Self { message: message.into(), status: None }
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self { message: message.into(), status: Some(status) }
    }
}
