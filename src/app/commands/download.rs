use std::path::{Path, PathBuf};

use log::debug;

use crate::app::AppContext;
use crate::domain::config::model::validate_file_name;
use crate::domain::{AppError, TemplateRenderer};
use crate::ports::PromptFileStore;

/// Options for saving the prompt.
#[derive(Debug, Clone, Default)]
pub struct DownloadOptions {
    /// Target directory; falls back to `output.directory`, then the context root.
    pub output_dir: Option<PathBuf>,
    /// File name; falls back to `output.file_name`, then the default prompt file name.
    pub file_name: Option<String>,
}

/// Save the composed prompt and return the written path.
pub fn execute<R, S>(
    ctx: &AppContext<R>,
    store: &S,
    options: &DownloadOptions,
) -> Result<PathBuf, AppError>
where
    R: TemplateRenderer,
    S: PromptFileStore,
{
    let file_name = match options.file_name.as_deref() {
        Some(name) => {
            validate_file_name(name)?;
            name
        }
        None => ctx.config().file_name(),
    };
    let directory = resolve_directory(ctx, options.output_dir.as_deref());

    let prompt = ctx.composer().generate_prompt()?;
    debug!("Saving prompt as {} in {}", file_name, directory.display());
    store.save(&directory, file_name, &prompt)
}

fn resolve_directory<R: TemplateRenderer>(ctx: &AppContext<R>, requested: Option<&Path>) -> PathBuf {
    match requested.or(ctx.config().output.directory.as_deref()) {
        Some(dir) if dir.is_relative() => ctx.root().join(dir),
        Some(dir) => dir.to_path_buf(),
        None => ctx.root().to_path_buf(),
    }
}
