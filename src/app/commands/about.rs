use crate::assets;

/// Overview of what the generated prompt asks for and how to use it.
pub fn execute() -> &'static str {
    assets::ABOUT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_lists_usage_and_models() {
        let text = execute();
        assert!(text.starts_with("n8n Video Workflow Prompt Generator"));
        assert!(text.contains("How to Use:"));
        assert!(text.contains("Supported AI Models:"));
    }
}
