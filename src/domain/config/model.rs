use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::prompt::PROMPT_FILE_NAME;
use crate::domain::{AppError, EndpointConfig};

/// Contents of `nvp.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptConfig {
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[endpoints]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointsConfig {
    pub ffmpeg_url: Option<String>,
    pub n8n_url: Option<String>,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub file_name: Option<String>,
    pub directory: Option<PathBuf>,
}

impl PromptConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.output.file_name {
            validate_file_name(name)?;
        }
        Ok(())
    }

    /// Resolve endpoints with precedence: override, then config, then default.
    pub fn resolve_endpoints(
        &self,
        ffmpeg_url: Option<String>,
        n8n_url: Option<String>,
    ) -> EndpointConfig {
        let mut endpoints = EndpointConfig::default();
        if let Some(value) = ffmpeg_url.or_else(|| self.endpoints.ffmpeg_url.clone()) {
            endpoints.set_ffmpeg_url(value);
        }
        if let Some(value) = n8n_url.or_else(|| self.endpoints.n8n_url.clone()) {
            endpoints.set_n8n_url(value);
        }
        endpoints
    }

    pub fn file_name(&self) -> &str {
        self.output.file_name.as_deref().unwrap_or(PROMPT_FILE_NAME)
    }
}

/// A saved prompt name must stay inside the output directory.
pub fn validate_file_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::config_error("output.file_name must not be empty"));
    }
    if name == "." || name == ".." || name.contains('/') || name.contains('\\') {
        return Err(AppError::config_error(format!(
            "output.file_name must be a bare file name, got '{}'",
            name
        )));
    }
    Ok(())
}
