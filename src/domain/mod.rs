pub mod artifact;
pub mod configuration;
pub mod error;
pub mod generation;
pub mod listing;
pub mod locality;
pub mod mode;
pub mod project;
pub mod prompt;
pub mod sanitize;

pub use artifact::OutputArtifact;
pub use configuration::{AppConfig, BackendConfig, GenerationApiConfig};
pub use error::AppError;
pub use generation::GenerationRequest;
pub use listing::{LISTING_STYLES, ListingMetadata, StyleSelector};
pub use locality::{LocalityKey, normalize};
pub use mode::{GenerationProfile, Mode};
pub use project::{ProjectId, TargetLanguage};
pub use prompt::{PlaceholderBindings, TemplateError, TemplateRenderer};
pub use sanitize::sanitize;
