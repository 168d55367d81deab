use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::domain::AppError;
use crate::ports::PromptFileStore;

/// Saves prompts to the local filesystem.
///
/// Content is staged in a temporary file next to the target and renamed into
/// place, so a failed save never leaves a truncated prompt behind. The staging
/// file is removed on drop if it was not persisted. The saved file keeps the
/// mode of the file it replaces, or gets `0o644` when it is new.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemPromptFileStore;

impl FilesystemPromptFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl PromptFileStore for FilesystemPromptFileStore {
    fn save(&self, directory: &Path, file_name: &str, content: &str) -> Result<PathBuf, AppError> {
        fs::create_dir_all(directory)?;
        let target = directory.join(file_name);

        let mut staged = NamedTempFile::new_in(directory)?;
        staged.write_all(content.as_bytes())?;
        if let Some(permissions) = target_permissions(&target) {
            staged.as_file().set_permissions(permissions)?;
        }
        staged.as_file().sync_all()?;
        staged.persist(&target).map_err(|err| err.error)?;

        debug!("Saved prompt to {}", target.display());
        Ok(target)
    }
}

/// Staging files are created owner-only; saved prompts use regular file modes.
#[cfg(unix)]
fn target_permissions(target: &Path) -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;

    const NEW_FILE_MODE: u32 = 0o644;

    match fs::metadata(target) {
        Ok(metadata) if metadata.is_file() => Some(metadata.permissions()),
        _ => Some(fs::Permissions::from_mode(NEW_FILE_MODE)),
    }
}

#[cfg(not(unix))]
fn target_permissions(_target: &Path) -> Option<fs::Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn save_writes_exact_content() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemPromptFileStore::new();

        let path = store.save(dir.path(), "prompt.txt", "line one\nline two").unwrap();

        assert_eq!(path, dir.path().join("prompt.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "line one\nline two");
    }

    #[test]
    fn save_creates_missing_directory_and_leaves_no_staging_files() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("prompts").join("n8n");
        let store = FilesystemPromptFileStore::new();

        store.save(&nested, "prompt.txt", "content").unwrap();

        let entries: Vec<_> = fs::read_dir(&nested).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn save_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemPromptFileStore::new();
        fs::write(dir.path().join("prompt.txt"), "old content that is longer").unwrap();

        store.save(dir.path(), "prompt.txt", "new").unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("prompt.txt")).unwrap(), "new");
    }

    #[test]
    fn save_fails_when_directory_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let store = FilesystemPromptFileStore::new();

        let err = store.save(&blocker, "prompt.txt", "content").unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[cfg(unix)]
    #[test]
    fn new_file_is_readable_by_group_and_others() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = FilesystemPromptFileStore::new();

        let path = store.save(dir.path(), "prompt.txt", "content").unwrap();

        let mode = fs::metadata(path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn replaced_file_keeps_its_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompt.txt");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o664)).unwrap();
        let store = FilesystemPromptFileStore::new();

        store.save(dir.path(), "prompt.txt", "new").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o664);
    }
}
