//! Per-mode fixed parameters.
//!
//! The three pipelines differ only in data; everything that varies between
//! them is looked up here instead of being spread across copies of the flow.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Which content pipeline a submission runs through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Locality,
    Listing,
    Translation,
}

/// Fixed generation options for a mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationProfile {
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub search_tool: bool,
    pub system_instruction: Option<&'static str>,
    /// Prefix for the message shown when the generation call fails.
    pub error_label: &'static str,
}

const LOCALITY_SYSTEM_INSTRUCTION: &str = "You are a helpful real-estate agent. I want response in proper tags and please direct give response dont mention any suggestion line or note. You may include additional useful details from Google search like PAA or pincode.";

const LISTING_SYSTEM_INSTRUCTION: &str = "You are a helpful real-estate agent. Please direct give response dont mention any suggestion line or note. Use simple, natural, and realistic language.";

const LOCALITY_PROFILE: GenerationProfile = GenerationProfile {
    max_output_tokens: 8192,
    temperature: 0.7,
    search_tool: true,
    system_instruction: Some(LOCALITY_SYSTEM_INSTRUCTION),
    error_label: "Error generating content",
};

const LISTING_PROFILE: GenerationProfile = GenerationProfile {
    max_output_tokens: 2048,
    temperature: 0.7,
    search_tool: false,
    system_instruction: Some(LISTING_SYSTEM_INSTRUCTION),
    error_label: "Error generating listing description",
};

const TRANSLATION_PROFILE: GenerationProfile = GenerationProfile {
    max_output_tokens: 3024,
    temperature: 1.0,
    search_tool: false,
    system_instruction: None,
    error_label: "Error translating text",
};

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Locality, Mode::Listing, Mode::Translation];

    pub fn profile(&self) -> &'static GenerationProfile {
        match self {
            Mode::Locality => &LOCALITY_PROFILE,
            Mode::Listing => &LISTING_PROFILE,
            Mode::Translation => &TRANSLATION_PROFILE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Locality => "locality",
            Mode::Listing => "listing",
            Mode::Translation => "translation",
        }
    }

    /// File name of the embedded default template for this mode.
    pub fn template_asset(&self) -> &'static str {
        match self {
            Mode::Locality => "locality.txt",
            Mode::Listing => "listing.txt",
            Mode::Translation => "translation.txt",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "locality" => Ok(Mode::Locality),
            "listing" => Ok(Mode::Listing),
            "translation" | "translate" => Ok(Mode::Translation),
            other => Err(AppError::config_error(format!(
                "Unknown mode '{}': expected locality, listing or translation",
                other
            ))),
        }
    }
}
