//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration,
//! context creation and command execution.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use tracing::debug;

use crate::app::{
    AppContext,
    commands::{self, PreparedRequest},
};
use crate::domain::configuration::load_config;
use crate::domain::{AppConfig, AppError, GenerationApiConfig};
use crate::ports::ClipboardWriter;
use crate::services::{HttpGeminiClient, HttpRealEstateBackend, PlaceholderRenderer, save_artifact};

pub use crate::app::commands::{Generated, Submission};
pub use crate::domain::{Mode, OutputArtifact, TargetLanguage};

static ENV_LOADER: Once = Once::new();

/// Load `.env` from the working directory once per process.
fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded environment file");
        }
    });
}

/// Options shared by every generation mode.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Explicit configuration file.
    pub config: Option<PathBuf>,
    /// Edited template replacing the embedded default.
    pub template: Option<PathBuf>,
}

/// A submission that passed validation, its gate call and rendering.
///
/// Nothing has been sent to the generation API yet.
#[derive(Debug)]
pub struct Prepared {
    request: PreparedRequest,
    generation: GenerationApiConfig,
}

impl Prepared {
    pub fn request(&self) -> &PreparedRequest {
        &self.request
    }

    /// Send the request. The API key is read only at this point.
    pub fn send(self) -> Result<Generated, AppError> {
        let generator = HttpGeminiClient::from_env_with_config(&self.generation)?;
        commands::dispatch(&generator, self.request)
    }
}

/// Prepare one submission from the current directory.
pub fn prepare(submission: &Submission, options: &GenerateOptions) -> Result<Prepared, AppError> {
    prepare_at(submission, options, &std::env::current_dir()?)
}

/// Prepare one submission, resolving the default config file relative to `work_dir`.
pub fn prepare_at(
    submission: &Submission,
    options: &GenerateOptions,
    work_dir: &Path,
) -> Result<Prepared, AppError> {
    ensure_env_loaded();
    let config = load_config(options.config.as_deref(), work_dir)?;
    let template = read_template(options.template.as_deref())?;

    let ctx = create_context(&config)?;
    let mut rng = rand::thread_rng();
    let request = commands::prepare(&ctx, submission, template.as_deref(), &mut rng)?;
    Ok(Prepared { request, generation: config.generation })
}

fn create_context(
    config: &AppConfig,
) -> Result<AppContext<HttpRealEstateBackend, PlaceholderRenderer>, AppError> {
    let backend = HttpRealEstateBackend::new(&config.backend)?;
    Ok(AppContext::new(backend, PlaceholderRenderer::new()))
}

fn read_template(path: Option<&Path>) -> Result<Option<String>, AppError> {
    path.map(|path| {
        fs::read_to_string(path).map_err(|err| {
            AppError::config_error(format!("Failed to read template {}: {}", path.display(), err))
        })
    })
    .transpose()
}

/// Embedded default template for `mode`, as a starting point for editing.
pub fn default_template(mode: Mode) -> Result<&'static str, AppError> {
    crate::services::default_template(mode)
}

/// Where to deliver generated content besides standard output.
#[derive(Debug, Clone, Default)]
pub struct DeliveryOptions {
    pub copy: bool,
    pub output_dir: Option<PathBuf>,
}

/// Copy and/or save generated content. Returns the saved file path, if any.
pub fn deliver<C: ClipboardWriter>(
    generated: &Generated,
    options: &DeliveryOptions,
    clipboard: &mut C,
) -> Result<Option<PathBuf>, AppError> {
    if options.copy {
        clipboard.write_text(&generated.content)?;
    }
    options.output_dir.as_deref().map(|dir| save_artifact(dir, &generated.artifact)).transpose()
}
