mod memory_prompt_file_store;
mod mock_clipboard;

pub use memory_prompt_file_store::MemoryPromptFileStore;
pub use mock_clipboard::MockClipboard;

use crate::adapters::MinijinjaTemplateRenderer;
use crate::app::AppContext;
use crate::domain::{EndpointConfig, PromptComposer, PromptConfig};

/// Context rooted at `/work` with the real template renderer.
pub fn test_context(
    endpoints: EndpointConfig,
    config: PromptConfig,
) -> AppContext<MinijinjaTemplateRenderer> {
    let composer = PromptComposer::new(endpoints, MinijinjaTemplateRenderer::new());
    AppContext::new(composer, config, "/work")
}
