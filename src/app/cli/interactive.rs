use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::app::api::{self, PromptOptions};
use crate::domain::AppError;

/// Let the user edit both endpoints, starting from the resolved values.
///
/// Returns `None` when the user cancels either prompt.
pub(super) fn edit_endpoints(
    mut options: PromptOptions,
) -> Result<Option<PromptOptions>, AppError> {
    let current = api::resolve_endpoints(&options)?;

    let Some(ffmpeg_url) = read_url("FFmpeg Server URL", current.ffmpeg_url())? else {
        return Ok(None);
    };
    let Some(n8n_url) = read_url("n8n Server URL", current.n8n_url())? else {
        return Ok(None);
    };

    options.ffmpeg_url = Some(ffmpeg_url);
    options.n8n_url = Some(n8n_url);
    Ok(Some(options))
}

fn read_url(label: &str, initial: &str) -> Result<Option<String>, AppError> {
    let answer = Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text();
    interpret_answer(label, answer)
}

fn interpret_answer(
    label: &str,
    answer: Result<String, DialoguerError>,
) -> Result<Option<String>, AppError> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Input { field: label.to_string(), details: err.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn answer_is_kept_verbatim() {
        let answer = interpret_answer("FFmpeg Server URL", Ok(String::new())).unwrap();
        assert_eq!(answer, Some(String::new()));
    }

    #[test]
    fn interrupted_prompt_is_a_cancel() {
        let interrupted = DialoguerError::IO(io::Error::new(ErrorKind::Interrupted, "ctrl-c"));
        let answer = interpret_answer("FFmpeg Server URL", Err(interrupted)).unwrap();
        assert_eq!(answer, None);
    }

    #[test]
    fn other_read_failures_are_errors() {
        let broken = DialoguerError::IO(io::Error::new(ErrorKind::BrokenPipe, "closed"));
        let err = interpret_answer("n8n Server URL", Err(broken)).unwrap_err();
        assert!(matches!(err, AppError::Input { field, .. } if field == "n8n Server URL"));
    }
}
