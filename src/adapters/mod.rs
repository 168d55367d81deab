pub mod clipboard_arboard;
pub mod prompt_file_filesystem;
pub mod template;

pub use clipboard_arboard::ArboardClipboard;
pub use prompt_file_filesystem::FilesystemPromptFileStore;
pub use template::MinijinjaTemplateRenderer;
