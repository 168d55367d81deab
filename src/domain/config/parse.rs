//! Pure parse/validate for `nvp.toml`.

use crate::domain::AppError;
use crate::domain::config::PromptConfig;

/// Parse and validate prompt configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<PromptConfig, AppError> {
    let config: PromptConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
