use arboard::Clipboard;
use log::debug;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Arboard-based clipboard implementation.
pub struct ArboardClipboard {
    clipboard: Clipboard,
}

impl ArboardClipboard {
    /// Connect to the system clipboard.
    pub fn new() -> Result<Self, AppError> {
        let clipboard =
            Clipboard::new().map_err(|e| AppError::ClipboardUnavailable(format!("{}", e)))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.clipboard
            .set_text(text)
            .map_err(|e| AppError::ClipboardUnavailable(format!("{}", e)))?;
        debug!("Wrote {} bytes to the system clipboard", text.len());
        Ok(())
    }
}
