use crate::app::AppContext;
use crate::domain::{AppError, TemplateRenderer};

/// Compose the prompt from the context's current endpoints.
pub fn execute<R: TemplateRenderer>(ctx: &AppContext<R>) -> Result<String, AppError> {
    ctx.composer().generate_prompt()
}
