//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{ArboardClipboard, FilesystemPromptFileStore, MinijinjaTemplateRenderer};
use crate::app::config::load_config;
use crate::app::{AppContext, commands};
use crate::domain::PromptComposer;

pub use crate::app::commands::download::DownloadOptions;
pub use crate::domain::{AppError, CopyFeedback, EndpointConfig};

/// Endpoint and config inputs shared by every command.
#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    /// FFmpeg server endpoint override.
    pub ffmpeg_url: Option<String>,
    /// n8n instance endpoint override.
    pub n8n_url: Option<String>,
    /// Config file; `nvp.toml` in the working directory is used when absent.
    pub config: Option<PathBuf>,
}

/// Create an `AppContext` rooted at `root`.
fn create_context(
    root: &Path,
    options: &PromptOptions,
) -> Result<AppContext<MinijinjaTemplateRenderer>, AppError> {
    let config = load_config(options.config.as_deref(), root)?;
    let endpoints = config.resolve_endpoints(options.ffmpeg_url.clone(), options.n8n_url.clone());
    let composer = PromptComposer::new(endpoints, MinijinjaTemplateRenderer::new());
    Ok(AppContext::new(composer, config, root))
}

/// Resolve endpoints (override, config, default) in the current directory.
pub fn resolve_endpoints(options: &PromptOptions) -> Result<EndpointConfig, AppError> {
    resolve_endpoints_at(std::env::current_dir()?, options)
}

/// Resolve endpoints (override, config, default) at the specified path.
pub fn resolve_endpoints_at(
    root: impl AsRef<Path>,
    options: &PromptOptions,
) -> Result<EndpointConfig, AppError> {
    let ctx = create_context(root.as_ref(), options)?;
    Ok(ctx.composer().endpoints().clone())
}

/// Compose the prompt in the current directory.
pub fn generate(options: &PromptOptions) -> Result<String, AppError> {
    generate_at(std::env::current_dir()?, options)
}

/// Compose the prompt at the specified path.
pub fn generate_at(root: impl AsRef<Path>, options: &PromptOptions) -> Result<String, AppError> {
    let ctx = create_context(root.as_ref(), options)?;
    commands::generate::execute(&ctx)
}

/// Copy the composed prompt to the system clipboard.
///
/// Returns the feedback state raised by the successful copy.
pub fn copy_to_clipboard(options: &PromptOptions) -> Result<CopyFeedback, AppError> {
    let ctx = create_context(&std::env::current_dir()?, options)?;
    let mut clipboard = ArboardClipboard::new()?;
    let mut feedback = CopyFeedback::new();
    commands::copy::execute(&ctx, &mut clipboard, &mut feedback)?;
    Ok(feedback)
}

/// Save the composed prompt to a file in the current directory.
pub fn download(options: &PromptOptions, save: &DownloadOptions) -> Result<PathBuf, AppError> {
    download_at(std::env::current_dir()?, options, save)
}

/// Save the composed prompt to a file relative to the specified path.
pub fn download_at(
    root: impl AsRef<Path>,
    options: &PromptOptions,
    save: &DownloadOptions,
) -> Result<PathBuf, AppError> {
    let ctx = create_context(root.as_ref(), options)?;
    let store = FilesystemPromptFileStore::new();
    commands::download::execute(&ctx, &store, save)
}

/// Informational overview of the prompt.
pub fn about() -> &'static str {
    commands::about::execute()
}
