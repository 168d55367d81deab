mod clipboard_writer;
mod prompt_file_store;

pub use clipboard_writer::ClipboardWriter;
pub use prompt_file_store::PromptFileStore;
