use log::debug;

use super::{PromptContext, TemplateRenderer};
use crate::assets;
use crate::domain::{AppError, EndpointConfig};

/// File name used when saving the composed prompt.
pub const PROMPT_FILE_NAME: &str = "n8n-video-workflow-prompt.txt";

/// Template variable holding the FFmpeg server endpoint.
pub const FFMPEG_URL_VAR: &str = "ffmpeg_url";

/// Template variable holding the n8n instance endpoint.
pub const N8N_URL_VAR: &str = "n8n_url";

const TEMPLATE_NAME: &str = "n8n_video_workflow_prompt.txt";

/// Holds the endpoint configuration and composes the workflow prompt from it.
pub struct PromptComposer<R: TemplateRenderer> {
    endpoints: EndpointConfig,
    renderer: R,
}

impl<R: TemplateRenderer> PromptComposer<R> {
    pub fn new(endpoints: EndpointConfig, renderer: R) -> Self {
        Self { endpoints, renderer }
    }

    pub fn endpoints(&self) -> &EndpointConfig {
        &self.endpoints
    }

    pub fn set_ffmpeg_url(&mut self, value: impl Into<String>) {
        self.endpoints.set_ffmpeg_url(value);
    }

    pub fn set_n8n_url(&mut self, value: impl Into<String>) {
        self.endpoints.set_n8n_url(value);
    }

    /// Substitute the current endpoints into the prompt template.
    ///
    /// Output depends only on the current endpoints. Values are inserted
    /// verbatim and are never re-read as template syntax.
    pub fn generate_prompt(&self) -> Result<String, AppError> {
        let context = PromptContext::new()
            .with_var(FFMPEG_URL_VAR, self.endpoints.ffmpeg_url())
            .with_var(N8N_URL_VAR, self.endpoints.n8n_url());

        let prompt =
            self.renderer.render(assets::N8N_VIDEO_WORKFLOW_PROMPT, &context, TEMPLATE_NAME)?;
        debug!("Composed prompt ({} bytes)", prompt.len());
        Ok(prompt)
    }
}
