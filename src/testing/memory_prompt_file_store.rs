use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::PromptFileStore;

/// In-memory prompt file store for testing.
#[derive(Default)]
pub struct MemoryPromptFileStore {
    files: RefCell<BTreeMap<PathBuf, String>>,
}

impl MemoryPromptFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl PromptFileStore for MemoryPromptFileStore {
    fn save(&self, directory: &Path, file_name: &str, content: &str) -> Result<PathBuf, AppError> {
        let path = directory.join(file_name);
        self.files.borrow_mut().insert(path.clone(), content.to_string());
        Ok(path)
    }
}
