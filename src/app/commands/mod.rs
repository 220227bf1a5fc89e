//! Mode controller.
//!
//! A submission runs in two stages. `prepare` validates the input, passes the
//! collaborator gate (locality lookup or project fetch) and renders the prompt.
//! `dispatch` sends the prepared request and sanitizes the reply. A
//! `PreparedRequest` can only come out of `prepare`, so the generation call can
//! never run ahead of a successful gate.

pub mod dispatch;
mod listing;
mod locality;
mod translation;


use rand::Rng;
use serde_json::Value;

use crate::app::AppContext;
use crate::domain::{
    AppError, GenerationRequest, LocalityKey, Mode, OutputArtifact, ProjectId, TargetLanguage,
    TemplateRenderer,
};
use crate::ports::{GenerationClient, RealEstateBackend};
use crate::services::default_template;

pub use dispatch::dispatch;

/// Raw user input for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Locality { city: String, locality: String },
    Listing { metadata: String },
    Translation { project_id: String, language: TargetLanguage },
}

impl Submission {
    pub fn mode(&self) -> Mode {
        match self {
            Submission::Locality { .. } => Mode::Locality,
            Submission::Listing { .. } => Mode::Listing,
            Submission::Translation { .. } => Mode::Translation,
        }
    }
}

/// What the generated content is about; decides the download artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Subject {
    Locality(LocalityKey),
    Listing,
    Translation { project_id: ProjectId, language: TargetLanguage },
}

impl Subject {
    fn artifact(&self, contents: String) -> OutputArtifact {
        match self {
            Subject::Locality(key) => OutputArtifact::locality_description(key, contents),
            Subject::Listing => OutputArtifact::listing_description(contents),
            Subject::Translation { project_id, language } => {
                OutputArtifact::translation(project_id, *language, contents)
            }
        }
    }
}

/// A rendered request that has passed every pre-generation check.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    request: GenerationRequest,
    subject: Subject,
    source_data: Option<Value>,
}

impl PreparedRequest {
    pub(crate) fn new(
        request: GenerationRequest,
        subject: Subject,
        source_data: Option<Value>,
    ) -> Self {
        Self { request, subject, source_data }
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    /// Collaborator payload embedded in the prompt (translation only).
    pub fn source_data(&self) -> Option<&Value> {
        self.source_data.as_ref()
    }
}

/// Sanitized generation output for one submission.
#[derive(Debug, Clone)]
pub struct Generated {
    pub mode: Mode,
    pub content: String,
    pub artifact: OutputArtifact,
    pub source_data: Option<Value>,
}

/// Validate, gate and render a submission.
///
/// `template` overrides the embedded default template for the mode.
pub fn prepare<B, T, R>(
    ctx: &AppContext<B, T>,
    submission: &Submission,
    template: Option<&str>,
    rng: &mut R,
) -> Result<PreparedRequest, AppError>
where
    B: RealEstateBackend,
    T: TemplateRenderer,
    R: Rng + ?Sized,
{
    let template = match template {
        Some(text) => text,
        None => default_template(submission.mode())?,
    };

    match submission {
        Submission::Locality { city, locality } => {
            locality::prepare(ctx, city, locality, template)
        }
        Submission::Listing { metadata } => listing::prepare(ctx, metadata, template, rng),
        Submission::Translation { project_id, language } => {
            translation::prepare(ctx, project_id, *language, template)
        }
    }
}

/// Run a submission end to end.
pub fn execute<B, T, G, R>(
    ctx: &AppContext<B, T>,
    generator: &G,
    submission: &Submission,
    template: Option<&str>,
    rng: &mut R,
) -> Result<Generated, AppError>
where
    B: RealEstateBackend,
    T: TemplateRenderer,
    G: GenerationClient + ?Sized,
    R: Rng + ?Sized,
{
    let prepared = prepare(ctx, submission, template, rng)?;
    dispatch(generator, prepared)
}
