use std::time::Instant;

use log::debug;

use crate::app::AppContext;
use crate::domain::{AppError, CopyFeedback, TemplateRenderer};
use crate::ports::ClipboardWriter;

/// Copy the composed prompt to the clipboard.
///
/// `feedback` is marked only after the clipboard accepted the full text; on
/// failure it is left untouched and the error is returned.
pub fn execute<R, C>(
    ctx: &AppContext<R>,
    clipboard: &mut C,
    feedback: &mut CopyFeedback,
) -> Result<(), AppError>
where
    R: TemplateRenderer,
    C: ClipboardWriter,
{
    let prompt = ctx.composer().generate_prompt()?;
    clipboard.write_text(&prompt)?;
    feedback.mark(Instant::now());
    debug!("Copied prompt ({} bytes)", prompt.len());
    Ok(())
}
