pub mod config;
pub mod copy_feedback;
pub mod endpoint_config;
pub mod error;
pub mod prompt;

pub use config::PromptConfig;
pub use copy_feedback::{COPY_FEEDBACK_WINDOW, CopyFeedback};
pub use endpoint_config::{DEFAULT_FFMPEG_URL, DEFAULT_N8N_URL, EndpointConfig};
pub use error::AppError;
pub use prompt::{
    PROMPT_FILE_NAME, PromptAssemblyError, PromptComposer, PromptContext,
    TemplateRenderer,
};
