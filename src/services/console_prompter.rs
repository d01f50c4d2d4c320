use dialoguer::{Confirm, Input};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Terminal prompt adapter backed by dialoguer.
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for ConsolePrompter {
    fn text(
        &self,
        message: &str,
        default: Option<&str>,
        help: Option<&str>,
    ) -> Result<String, AppError> {
        if let Some(help) = help {
            println!("{help}");
        }

        // The default is pre-filled as editable text so the operator can
        // clear it entirely; an empty answer must reach the caller as-is.
        let mut input = Input::<String>::new().with_prompt(message).allow_empty(true);
        if let Some(default) = default {
            input = input.with_initial_text(default);
        }

        let value = input
            .interact_text()
            .map_err(|err| AppError::config_error(format!("Failed to read '{message}': {err}")))?;
        Ok(value.trim().to_string())
    }

    fn confirm(&self, message: &str, help: Option<&str>) -> Result<bool, AppError> {
        if let Some(help) = help {
            println!("{help}");
        }

        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|err| AppError::config_error(format!("Failed to read '{message}': {err}")))
    }
}
