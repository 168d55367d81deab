//! nvp: compose the n8n video-workflow AI prompt and deliver it to the clipboard or a file.

pub mod adapters;
pub mod app;
mod assets;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    DownloadOptions, PromptOptions, about, copy_to_clipboard, download, download_at, generate,
    generate_at, resolve_endpoints, resolve_endpoints_at,
};
pub use domain::{
    AppError, COPY_FEEDBACK_WINDOW, CopyFeedback, DEFAULT_FFMPEG_URL, DEFAULT_N8N_URL,
    EndpointConfig, PROMPT_FILE_NAME, PromptComposer,
};
