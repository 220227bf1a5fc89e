//! estate-scribe: prompt templating and response cleanup for real-estate content generation.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    DeliveryOptions, GenerateOptions, Generated, Prepared, Submission, default_template, deliver,
    prepare, prepare_at,
};
pub use app::commands::PreparedRequest;
pub use domain::{AppError, Mode, OutputArtifact, TargetLanguage};
