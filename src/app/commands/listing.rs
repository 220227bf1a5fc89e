use rand::Rng;
use tracing::debug;

use crate::app::AppContext;
use crate::domain::prompt::bindings::names;
use crate::domain::{
    AppError, GenerationRequest, ListingMetadata, Mode, PlaceholderBindings, StyleSelector,
    TemplateRenderer,
};
use crate::ports::RealEstateBackend;

use super::{PreparedRequest, Subject};

pub(super) fn prepare<B, T, R>(
    ctx: &AppContext<B, T>,
    metadata: &str,
    template: &str,
    rng: &mut R,
) -> Result<PreparedRequest, AppError>
where
    B: RealEstateBackend,
    T: TemplateRenderer,
    R: Rng + ?Sized,
{
    let metadata = ListingMetadata::new(metadata)?;
    let style = StyleSelector::new(rng).select();
    debug!(style, "Selected listing response style");

    let bindings = PlaceholderBindings::new()
        .with(names::METADATA, metadata.as_str())
        .with(names::SELECT_FONT, style);
    let prompt = ctx.renderer().render(template, &bindings)?;

    Ok(PreparedRequest::new(
        GenerationRequest::for_mode(Mode::Listing, prompt),
        Subject::Listing,
        None,
    ))
}
