use arboard::Clipboard;
use tracing::debug;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// System clipboard backed by arboard.
///
/// On X11 and Wayland the selection is served by this process, so a clipboard
/// manager has to take it over before the process exits.
pub struct ArboardClipboard {
    clipboard: Clipboard,
}

impl ArboardClipboard {
    /// Connect to the system clipboard.
    pub fn open() -> Result<Self, AppError> {
        let clipboard = Clipboard::new()
            .map_err(|e| AppError::ClipboardError(format!("clipboard unavailable: {}", e)))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        debug!(chars = text.chars().count(), "Copying generated content to clipboard");
        self.clipboard.set_text(text).map_err(|e| AppError::ClipboardError(e.to_string()))
    }
}
