use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for saving the composed prompt as a file.
pub trait PromptFileStore {
    /// Save `content` as `file_name` inside `directory`, returning the written path.
    fn save(&self, directory: &Path, file_name: &str, content: &str) -> Result<PathBuf, AppError>;
}
