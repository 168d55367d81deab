pub mod model;
pub mod parse;
pub mod paths;

pub use model::{EndpointsConfig, OutputConfig, PromptConfig};
pub use parse::parse_config_content;
