//! Shared testing utilities for nvp CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `nvp` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("nvp").expect("Failed to locate nvp binary");
        cmd.current_dir(self.work_dir()).env("HOME", self.root.path()).env_remove("RUST_LOG");
        cmd
    }

    /// Write `nvp.toml` into the work directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("nvp.toml"), content).expect("Failed to write nvp.toml");
    }

    /// Read a file relative to the work directory.
    pub fn read(&self, relative: impl AsRef<Path>) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read file")
    }
}
