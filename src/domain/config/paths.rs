use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "nvp.toml";

/// `<root>/nvp.toml`
pub fn config(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
