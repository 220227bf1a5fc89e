use std::io;

use thiserror::Error;

use super::prompt::TemplateError;

/// Library-wide error type for escribe operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file contains an invalid value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// A required form field was empty. Blocks submission before any network call.
    #[error("'{field}' must not be empty")]
    Validation { field: &'static str },

    /// Locality lookup gate did not answer with HTTP 200.
    #[error("Failed to fetch locality data for '{url}'{}", describe_lookup_failure(.status, .message))]
    LocalityLookupFailed { url: String, status: Option<u16>, message: Option<String> },

    /// Project data endpoint did not answer with HTTP 200 and a JSON body.
    #[error("Failed to fetch data for project ID {project_id}. {}", describe_project_failure(.status, .message))]
    ProjectFetchFailed { project_id: String, status: Option<u16>, message: Option<String> },

    /// Generation backend call failed. `label` names the operation.
    #[error("{label}: {message}")]
    Generation { label: &'static str, message: String, status: Option<u16> },

    /// Template could not be rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Clipboard write failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Interactive prompt failed.
    #[error("Prompt error: {0}")]
    PromptError(String),
}

fn describe_lookup_failure(status: &Option<u16>, message: &Option<String>) -> String {
    match (status, message) {
        (Some(code), _) => format!(" (status code {code})"),
        (None, Some(message)) => format!(": {message}"),
        (None, None) => String::new(),
    }
}

fn describe_project_failure(status: &Option<u16>, message: &Option<String>) -> String {
    match (status, message) {
        (Some(code), _) => format!("Status code: {code}"),
        (None, Some(message)) => message.clone(),
        (None, None) => "No response".to_string(),
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// True for failures on a collaborator call that halt the pipeline before generation.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, AppError::LocalityLookupFailed { .. } | AppError::ProjectFetchFailed { .. })
    }
}
