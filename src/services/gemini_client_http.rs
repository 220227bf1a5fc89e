//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::domain::{AppError, GenerationApiConfig, GenerationRequest};
use crate::ports::{CallFailure, GenerationClient};

const X_GOOG_API_KEY: &str = "x-goog-api-key";
const DEFAULT_STATUS_MESSAGE: &str = "Generation API request failed";

/// HTTP transport for the generation API.
///
/// One request per call; there is no retry layer.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GenerationApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, endpoint: generate_content_url(config)?, client })
    }

    /// Create using the API key from the environment variable named in the configuration.
    pub fn from_env_with_config(config: &GenerationApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::EnvironmentVariableMissing(config.api_key_env.clone()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, body: &ApiRequest<'_>) -> Result<String, CallFailure> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .map_err(|e| CallFailure::transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body_text = response.text().map_err(|e| {
            CallFailure::transport(format!("Failed to read response body: {}", e))
        })?;
        debug!(status = status.as_u16(), bytes = body_text.len(), "Generation API responded");

        if status.is_success() {
            let api_response: ApiResponse = serde_json::from_str(&body_text).map_err(|e| {
                CallFailure::status(status.as_u16(), format!("Failed to parse response: {}", e))
            })?;
            return api_response.into_text().ok_or_else(|| {
                CallFailure::status(status.as_u16(), "No text in generation response")
            });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(CallFailure::status(status.as_u16(), message))
    }
}

fn generate_content_url(config: &GenerationApiConfig) -> Result<Url, AppError> {
    let mut url = config.api_url.clone();
    url.path_segments_mut()
        .map_err(|_| {
            AppError::InvalidConfig(format!(
                "generation.api_url cannot be a base: {}",
                config.api_url
            ))
        })?
        .pop_if_empty()
        .push("models")
        .push(&format!("{}:generateContent", config.model));
    Ok(url)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    generation_config: GenerationConfig,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

impl<'a> ApiRequest<'a> {
    fn from_request(request: &'a GenerationRequest) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: &request.rendered_prompt }],
            }],
            system_instruction: request
                .system_instruction
                .as_deref()
                .map(|text| Content { role: None, parts: vec![Part { text }] }),
            generation_config: GenerationConfig {
                max_output_tokens: request.max_output_tokens,
                temperature: request.temperature,
            },
            tools: if request.tools_enabled {
                vec![Tool { google_search: GoogleSearch {} }]
            } else {
                Vec::new()
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl ApiResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let texts: Vec<String> = content.parts.into_iter().filter_map(|part| part.text).collect();
        (!texts.is_empty()).then(|| texts.concat())
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl GenerationClient for HttpGeminiClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, CallFailure> {
        info!(
            mode = %request.mode,
            prompt_chars = request.rendered_prompt.len(),
            max_output_tokens = request.max_output_tokens,
            search = request.tools_enabled,
            "Sending request to generation API"
        );
        self.send_request(&ApiRequest::from_request(request))
    }
}
