use crate::app::AppContext;
use crate::domain::prompt::bindings::names;
use crate::domain::{
    AppError, GenerationRequest, LocalityKey, Mode, PlaceholderBindings, TemplateRenderer,
};
use crate::ports::RealEstateBackend;

use super::{PreparedRequest, Subject};

pub(super) fn prepare<B, T>(
    ctx: &AppContext<B, T>,
    city: &str,
    locality: &str,
    template: &str,
) -> Result<PreparedRequest, AppError>
where
    B: RealEstateBackend,
    T: TemplateRenderer,
{
    let key = LocalityKey::new(city, locality)?;
    let url = ctx.backend().locality_url(&key);

    // The page body is not used; the lookup only gates generation.
    ctx.backend().check_locality(&key).map_err(|failure| AppError::LocalityLookupFailed {
        url: url.to_string(),
        status: failure.status,
        message: Some(failure.message),
    })?;

    let bindings = PlaceholderBindings::new()
        .with(names::CITY, key.city())
        .with(names::LOCALITY, key.locality())
        .with(names::URL, url.as_str());
    let prompt = ctx.renderer().render(template, &bindings)?;

    Ok(PreparedRequest::new(
        GenerationRequest::for_mode(Mode::Locality, prompt),
        Subject::Locality(key),
        None,
    ))
}
