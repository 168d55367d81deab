pub mod composer;
pub mod context;
pub mod error;
pub mod template;

pub use composer::{FFMPEG_URL_VAR, N8N_URL_VAR, PROMPT_FILE_NAME, PromptComposer};
pub use context::PromptContext;
pub use error::PromptAssemblyError;
pub use template::TemplateRenderer;
