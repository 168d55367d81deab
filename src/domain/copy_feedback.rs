use std::time::{Duration, Instant};

/// How long the "copied" indicator stays up after a successful copy.
pub const COPY_FEEDBACK_WINDOW: Duration = Duration::from_secs(3);

const COPIED_LABEL: &str = "✓ Copied!";
const IDLE_LABEL: &str = "📋 Copy Prompt to Clipboard";

/// Transient "copied" flag raised by a successful clipboard write.
///
/// The flag is derived from the instant of the last copy instead of a timer,
/// so marking again simply restarts the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied_at: Option<Instant>,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful copy at `now`.
    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Whether the indicator is still showing at `now`.
    pub fn is_active(&self, now: Instant) -> bool {
        match self.copied_at {
            Some(at) => now.saturating_duration_since(at) < COPY_FEEDBACK_WINDOW,
            None => false,
        }
    }

    /// Label for the copy action at `now`.
    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_active(now) { COPIED_LABEL } else { IDLE_LABEL }
    }
}
