//! Prompt configuration loading.

use std::fs;
use std::path::Path;

use log::debug;

use crate::domain::AppError;
use crate::domain::config::{self, PromptConfig};

/// Load `nvp.toml`.
///
/// An explicit path must exist. Without one, `<root>/nvp.toml` is read when
/// present and defaults are used otherwise.
pub fn load_config(explicit: Option<&Path>, root: &Path) -> Result<PromptConfig, AppError> {
    let config_path = match explicit {
        Some(path) if path.is_relative() => root.join(path),
        Some(path) => path.to_path_buf(),
        None => config::paths::config(root),
    };

    if !config_path.exists() {
        if explicit.is_some() {
            return Err(AppError::ConfigMissing(config_path));
        }
        debug!("No config at {}, using defaults", config_path.display());
        return Ok(PromptConfig::default());
    }

    debug!("Loading config from {}", config_path.display());
    let content = fs::read_to_string(&config_path)?;
    config::parse_config_content(&content)
}
