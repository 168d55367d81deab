//! Embedded text assets.

/// Workflow prompt template. Substitution points use `${ name }`.
pub static N8N_VIDEO_WORKFLOW_PROMPT: &str = include_str!("assets/n8n_video_workflow_prompt.txt");

/// Overview printed by `nvp about`.
pub static ABOUT: &str = include_str!("assets/about.txt");
