use std::path::{Path, PathBuf};

use crate::domain::{PromptComposer, PromptConfig, TemplateRenderer};

/// Application context holding dependencies for command execution.
pub struct AppContext<R: TemplateRenderer> {
    composer: PromptComposer<R>,
    config: PromptConfig,
    root: PathBuf,
}

impl<R: TemplateRenderer> AppContext<R> {
    /// Create a new application context.
    pub fn new(composer: PromptComposer<R>, config: PromptConfig, root: impl Into<PathBuf>) -> Self {
        Self { composer, config, root: root.into() }
    }

    /// Get a reference to the prompt composer.
    pub fn composer(&self) -> &PromptComposer<R> {
        &self.composer
    }

    /// Get a mutable reference to the prompt composer.
    pub fn composer_mut(&mut self) -> &mut PromptComposer<R> {
        &mut self.composer
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    /// Directory relative paths are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
