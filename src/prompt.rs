//! User interaction for the command-line front end.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Input};

/// Asks the user for the values the command line did not provide.
pub trait Prompter {
    /// Asks for free text, answering `default` on empty input.
    fn input(&self, prompt: String, default: String) -> Result<String>;

    /// Asks a yes/no question that defaults to yes.
    ///
    /// Returns `true` without asking when `skip` is set.
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;
}

/// Terminal prompts backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: String, default: String) -> Result<String> {
        let value: String = Input::new()
            .with_prompt(prompt)
            .default(default)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))?;
        Ok(value.trim().to_string())
    }

    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
