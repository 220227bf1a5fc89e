//! Listing-description inputs and the response-format style selector.

use rand::Rng;
use rand::seq::SliceRandom;

use super::AppError;

/// Response-shape instructions a listing prompt can ask for.
pub const LISTING_STYLES: [&str; 3] = [
    "The response format should be flexible—either a single paragraph, format:(<p>.....</p>) or a mix of one paragraph with 2–3 meaningful bullet points,format:(<ul> <li>...</li></ul>), depending on what best suits the data.",
    "The response format should be flexible—either a single or double paragraph in this format (<p>.....</p>)",
    "The response format should be a single paragraph in this format (<p>.....</p>)",
];

/// Raw property metadata as pasted by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingMetadata(String);

impl ListingMetadata {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        if raw.trim().is_empty() {
            return Err(AppError::Validation { field: "metadata" });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Picks one of a fixed set of style instructions per draw.
///
/// The random source is injected so callers decide between a thread RNG and a
/// seeded generator.
#[derive(Debug)]
pub struct StyleSelector<R> {
    styles: &'static [&'static str],
    rng: R,
}

impl<R: Rng> StyleSelector<R> {
    pub fn new(rng: R) -> Self {
        Self::with_styles(&LISTING_STYLES, rng)
    }

    /// `styles` must be non-empty.
    pub fn with_styles(styles: &'static [&'static str], rng: R) -> Self {
        debug_assert!(!styles.is_empty());
        Self { styles, rng }
    }

    pub fn select(&mut self) -> &'static str {
        self.styles.choose(&mut self.rng).copied().unwrap_or(LISTING_STYLES[0])
    }
}
