//! Translation inputs.

use std::fmt;
use std::str::FromStr;

use super::AppError;

/// Identifier of a project on the real-estate backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation { field: "project id" });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Languages the translator targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetLanguage {
    #[default]
    Hindi,
    Marathi,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 2] = [TargetLanguage::Hindi, TargetLanguage::Marathi];

    /// Display name embedded in the prompt.
    pub fn name(&self) -> &'static str {
        match self {
            TargetLanguage::Hindi => "Hindi",
            TargetLanguage::Marathi => "Marathi",
        }
    }

    /// ISO 639-1 code, used in output file names.
    pub fn code(&self) -> &'static str {
        match self {
            TargetLanguage::Hindi => "hi",
            TargetLanguage::Marathi => "mr",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetLanguage {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TargetLanguage::ALL
            .into_iter()
            .find(|lang| {
                lang.name().eq_ignore_ascii_case(wanted) || lang.code().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| {
                AppError::config_error(format!(
                    "Unsupported target language '{}': expected Hindi (hi) or Marathi (mr)",
                    wanted
                ))
            })
    }
}
