//! Writes download artifacts to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::{AppError, OutputArtifact};

/// Save `artifact` under `dir`, creating the directory if needed.
///
/// Path separators in the file name (which can come from user input) are
/// replaced so the file always lands directly inside `dir`.
pub fn save_artifact(dir: &Path, artifact: &OutputArtifact) -> Result<PathBuf, AppError> {
    fs::create_dir_all(dir)?;
    let file_name: String = artifact
        .file_name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') || c.is_control() { '_' } else { c })
        .collect();
    let path = dir.join(file_name);
    fs::write(&path, &artifact.contents)?;
    info!(path = %path.display(), mime = artifact.mime_type, "Saved output artifact");
    Ok(path)
}
