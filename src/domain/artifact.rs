//! Download-as-file output.

use super::{LocalityKey, ProjectId, TargetLanguage};

/// Generated content packaged for saving to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

pub const HTML_MIME: &str = "text/html";
pub const TEXT_MIME: &str = "text/plain";

impl OutputArtifact {
    pub fn locality_description(key: &LocalityKey, contents: String) -> Self {
        Self {
            file_name: format!("{}_{}_description.html", key.locality(), key.city()),
            mime_type: HTML_MIME,
            contents,
        }
    }

    pub fn listing_description(contents: String) -> Self {
        Self { file_name: "listing_description.html".to_string(), mime_type: HTML_MIME, contents }
    }

    pub fn translation(project_id: &ProjectId, language: TargetLanguage, contents: String) -> Self {
        Self {
            file_name: format!("translated_{}_{}.txt", project_id, language.code()),
            mime_type: TEXT_MIME,
            contents,
        }
    }
}
