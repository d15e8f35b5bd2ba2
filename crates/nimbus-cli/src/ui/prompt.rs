//! Interactive prompts.

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};

/// Questions a command can ask the user.
pub trait Prompt: Send + Sync {
    /// Pick one of `items`. `None` means the user cancelled.
    fn select(&self, message: &str, items: &[String]) -> Result<Option<usize>>;

    /// Ask a yes/no question.
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;
}

/// Prompts drawn on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn select(&self, message: &str, items: &[String]) -> Result<Option<usize>> {
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(picked)
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(default)
            .interact()?;
        Ok(answer)
    }
}
