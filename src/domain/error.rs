use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::prompt::PromptAssemblyError;

/// Library-wide error type for nvp operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// System clipboard could not be written (permission denied or no provider).
    #[error("Failed to copy to clipboard: {0}")]
    ClipboardUnavailable(String),

    /// Interactive input could not be read.
    #[error("Failed to read {field}: {details}")]
    Input { field: String, details: String },

    /// Prompt template failed to render.
    #[error("Prompt assembly failed: {0}")]
    PromptAssembly(#[from] PromptAssemblyError),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
