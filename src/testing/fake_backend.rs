use std::cell::RefCell;

use serde_json::Value;
use url::Url;

use crate::domain::{LocalityKey, ProjectId};
use crate::ports::{CallFailure, RealEstateBackend};

/// In-memory backend with configurable answers and call logs.
pub struct FakeBackend {
    base_url: Url,
    lookup: Result<(), CallFailure>,
    project: Result<Value, CallFailure>,
    pub lookups: RefCell<Vec<String>>,
    pub project_fetches: RefCell<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            base_url: Url::parse("https://backend.test").unwrap(),
            lookup: Ok(()),
            project: Ok(Value::Null),
            lookups: RefCell::new(vec![]),
            project_fetches: RefCell::new(vec![]),
        }
    }

    pub fn with_lookup_status(mut self, status: u16) -> Self {
        self.lookup = if status == 200 {
            Ok(())
        } else {
            Err(CallFailure::status(status, "Not Found"))
        };
        self
    }

    pub fn with_project(mut self, payload: Value) -> Self {
        self.project = Ok(payload);
        self
    }

    pub fn with_project_failure(mut self, failure: CallFailure) -> Self {
        self.project = Err(failure);
        self
    }
}

impl RealEstateBackend for FakeBackend {
    fn locality_url(&self, key: &LocalityKey) -> Url {
        key.lookup_url(&self.base_url)
    }

    fn check_locality(&self, key: &LocalityKey) -> Result<(), CallFailure> {
        self.lookups.borrow_mut().push(format!("{}/{}", key.city_lower(), key.locality_slug()));
        self.lookup.clone()
    }

    fn fetch_project(&self, project_id: &ProjectId) -> Result<Value, CallFailure> {
        self.project_fetches.borrow_mut().push(project_id.to_string());
        self.project.clone()
    }
}
