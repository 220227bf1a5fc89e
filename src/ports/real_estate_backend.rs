//! Real-estate backend port definition.

use serde_json::Value;
use url::Url;

use crate::domain::{LocalityKey, ProjectId};

use super::CallFailure;

/// Port for the locality lookup and project data endpoints.
pub trait RealEstateBackend {
    /// Public lookup page for a locality.
    fn locality_url(&self, key: &LocalityKey) -> Url;

    /// Succeeds only when the lookup page answers HTTP 200. The body is not used.
    fn check_locality(&self, key: &LocalityKey) -> Result<(), CallFailure>;

    /// Fetch the project payload. Requires HTTP 200 and a JSON body.
    fn fetch_project(&self, project_id: &ProjectId) -> Result<Value, CallFailure>;
}
