use crate::domain::AppError;

/// Port for writing to the system clipboard.
pub trait ClipboardWriter {
    /// Write text to the clipboard.
    ///
    /// Implementations return `AppError::ClipboardUnavailable` when the platform
    /// refuses the write; an `Ok` means the full text was handed over.
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;
}
