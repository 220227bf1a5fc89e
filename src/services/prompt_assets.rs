//! Embedded default prompt templates.
//!
//! Operators start from these and may pass an edited copy with `--template`.

use include_dir::{Dir, include_dir};

use crate::domain::{AppError, Mode};

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

/// Default template text for `mode`.
pub fn default_template(mode: Mode) -> Result<&'static str, AppError> {
    PROMPTS_DIR
        .get_file(mode.template_asset())
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| {
            AppError::config_error(format!(
                "Embedded template '{}' is missing",
                mode.template_asset()
            ))
        })
}
