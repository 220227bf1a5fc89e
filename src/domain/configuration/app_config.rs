//! Application configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `escribe.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Generation API configuration.
    #[serde(default)]
    pub generation: GenerationApiConfig,
    /// Real-estate backend configuration.
    #[serde(default)]
    pub backend: BackendConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.generation.validate()?;
        self.backend.validate()?;
        Ok(())
    }
}

/// Generation API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationApiConfig {
    /// Base URL of the API version, e.g. `https://generativelanguage.googleapis.com/v1beta`.
    #[serde(default = "default_generation_url")]
    pub api_url: Url,
    /// Model identifier appended as `models/{model}:generateContent`.
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout in seconds.
    #[serde(default = "default_generation_timeout")]
    pub timeout_secs: u64,
}

impl Default for GenerationApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_generation_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_generation_timeout(),
        }
    }
}

impl GenerationApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_http_url("generation.api_url", &self.api_url)?;
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("generation.model must not be empty".to_string()));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "generation.api_key_env must not be empty".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "generation.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Real-estate backend configuration. Production and staging differ only in `base_url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub base_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_backend_timeout")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { base_url: default_backend_url(), timeout_secs: default_backend_timeout() }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_http_url("backend.base_url", &self.base_url)?;
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "backend.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn validate_http_url(field: &str, url: &Url) -> Result<(), AppError> {
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(AppError::InvalidConfig(format!("{field} must be an http(s) URL, got '{url}'")));
    }
    Ok(())
}

fn default_generation_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default generation URL must be valid")
}

fn default_backend_url() -> Url {
    Url::parse("https://www.squareyards.com").expect("Default backend URL must be valid")
}

fn default_model() -> String {
    "gemini-2.0-flash-001".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_generation_timeout() -> u64 {
    120
}

fn default_backend_timeout() -> u64 {
    30
}
