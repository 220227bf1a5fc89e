use crate::app::AppContext;
use crate::domain::prompt::bindings::names;
use crate::domain::{
    AppError, GenerationRequest, Mode, PlaceholderBindings, ProjectId, TargetLanguage,
    TemplateRenderer,
};
use crate::ports::RealEstateBackend;

use super::{PreparedRequest, Subject};

pub(super) fn prepare<B, T>(
    ctx: &AppContext<B, T>,
    project_id: &str,
    language: TargetLanguage,
    template: &str,
) -> Result<PreparedRequest, AppError>
where
    B: RealEstateBackend,
    T: TemplateRenderer,
{
    let project_id = ProjectId::new(project_id)?;
    let payload = ctx.backend().fetch_project(&project_id).map_err(|failure| {
        AppError::ProjectFetchFailed {
            project_id: project_id.to_string(),
            status: failure.status,
            message: Some(failure.message),
        }
    })?;

    let bindings = PlaceholderBindings::new()
        .with(names::TARGET_LANGUAGE, language.name())
        .with(names::TEXT, payload.to_string());
    let prompt = ctx.renderer().render(template, &bindings)?;

    Ok(PreparedRequest::new(
        GenerationRequest::for_mode(Mode::Translation, prompt),
        Subject::Translation { project_id, language },
        Some(payload),
    ))
}
