use minijinja::syntax::SyntaxConfig;
use minijinja::{Environment, UndefinedBehavior};

use crate::domain::prompt::{PromptAssemblyError, PromptContext, TemplateRenderer};

/// Substitution points are written `${ name }` so that the `{{ ... }}`
/// expressions the prompt teaches the model stay literal text.
const VARIABLE_START: &str = "${";
const VARIABLE_END: &str = "}";

/// Template renderer using Minijinja.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template: &str,
        context: &PromptContext,
        template_name: &str,
    ) -> Result<String, PromptAssemblyError> {
        if let Some(token) = disallowed_template_token(template) {
            return Err(PromptAssemblyError::TemplateSyntaxNotAllowed {
                template: template_name.to_string(),
                token: token.to_string(),
            });
        }

        let env = environment(template_name)?;
        env.render_str(template, &context.variables)
            .map_err(|err| template_render_error(template_name, err))
    }
}

fn environment(template_name: &str) -> Result<Environment<'static>, PromptAssemblyError> {
    let syntax = SyntaxConfig::builder()
        .variable_delimiters(VARIABLE_START, VARIABLE_END)
        .build()
        .map_err(|err| template_render_error(template_name, err))?;

    let mut env = Environment::new();
    env.set_syntax(syntax);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    Ok(env)
}

fn disallowed_template_token(template: &str) -> Option<&'static str> {
    if template.contains("{%") {
        return Some("{%");
    }
    if template.contains("{#") {
        return Some("{#");
    }
    None
}

fn template_render_error(template_name: &str, err: impl std::fmt::Display) -> PromptAssemblyError {
    PromptAssemblyError::TemplateRenderError {
        template: template_name.to_string(),
        reason: err.to_string(),
    }
}
