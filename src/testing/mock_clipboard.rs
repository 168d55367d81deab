use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Mock clipboard for testing.
#[derive(Default)]
pub struct MockClipboard {
    pub written_text: Option<String>,
    pub should_fail: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that refuses every write, like a denied permission prompt.
    pub fn denied() -> Self {
        Self { written_text: None, should_fail: true }
    }

    pub fn get_written_text(&self) -> Option<&str> {
        self.written_text.as_deref()
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.should_fail {
            return Err(AppError::ClipboardUnavailable("permission denied".to_string()));
        }
        self.written_text = Some(text.to_string());
        Ok(())
    }
}
