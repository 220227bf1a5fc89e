//! Locality input normalization.

use url::Url;

use super::AppError;

const LOOKUP_SEGMENT: &str = "getlocalitydatafordesc";

/// Lower-case `raw` and replace spaces with hyphens.
///
/// Idempotent: normalizing an already-normalized value is a no-op.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "-")
}

/// A validated (city, locality) pair together with its lookup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalityKey {
    city: String,
    locality: String,
    city_lower: String,
    locality_slug: String,
}

impl LocalityKey {
    /// Build a key from raw form input. Both fields must be non-blank.
    pub fn new(city: &str, locality: &str) -> Result<Self, AppError> {
        let city = city.trim();
        let locality = locality.trim();
        if city.is_empty() {
            return Err(AppError::Validation { field: "city" });
        }
        if locality.is_empty() {
            return Err(AppError::Validation { field: "locality" });
        }

        Ok(Self {
            city: city.to_string(),
            locality: locality.to_string(),
            city_lower: city.to_lowercase(),
            locality_slug: normalize(locality),
        })
    }

    /// City exactly as entered.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Locality exactly as entered.
    pub fn locality(&self) -> &str {
        &self.locality
    }

    pub fn city_lower(&self) -> &str {
        &self.city_lower
    }

    pub fn locality_slug(&self) -> &str {
        &self.locality_slug
    }

    /// Lookup page for this locality under `base_url`.
    pub fn lookup_url(&self, base_url: &Url) -> Url {
        let mut url = base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                LOOKUP_SEGMENT,
                self.city_lower.as_str(),
                self.locality_slug.as_str(),
            ]);
        }
        url
    }
}
