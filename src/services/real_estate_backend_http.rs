//! Real-estate backend client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::domain::{AppError, BackendConfig, LocalityKey, ProjectId};
use crate::ports::{CallFailure, RealEstateBackend};

const PROJECT_SEGMENT: &str = "project-data-for-ai";

/// HTTP transport for the locality lookup and project data endpoints.
#[derive(Debug, Clone)]
pub struct HttpRealEstateBackend {
    base_url: Url,
    client: Client,
}

impl HttpRealEstateBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url: config.base_url.clone(), client })
    }

    fn project_url(&self, project_id: &ProjectId) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([PROJECT_SEGMENT, project_id.as_str()]);
        }
        url
    }

    fn get(&self, url: &Url) -> Result<reqwest::blocking::Response, CallFailure> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| CallFailure::transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CallFailure::status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unexpected status").to_string(),
            ));
        }
        Ok(response)
    }
}

impl RealEstateBackend for HttpRealEstateBackend {
    fn locality_url(&self, key: &LocalityKey) -> Url {
        key.lookup_url(&self.base_url)
    }

    fn check_locality(&self, key: &LocalityKey) -> Result<(), CallFailure> {
        let url = self.locality_url(key);
        let response = self.get(&url)?;
        if response.status().as_u16() != 200 {
            let status = response.status();
            return Err(CallFailure::status(status.as_u16(), "Lookup page did not answer 200"));
        }
        info!(city = key.city_lower(), locality = key.locality_slug(), "Locality lookup succeeded");
        Ok(())
    }

    fn fetch_project(&self, project_id: &ProjectId) -> Result<Value, CallFailure> {
        let url = self.project_url(project_id);
        let response = self.get(&url)?;
        let status = response.status().as_u16();
        if status != 200 {
            return Err(CallFailure::status(status, "Project endpoint did not answer 200"));
        }
        let payload: Value = response.json().map_err(|e| {
            CallFailure::transport(format!("Project data is not valid JSON: {}", e))
        })?;
        info!(project_id = project_id.as_str(), "Fetched project data");
        Ok(payload)
    }
}
