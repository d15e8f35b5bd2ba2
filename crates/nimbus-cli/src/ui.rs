//! Terminal user interface: printing, spinners and prompts.

pub mod output;
pub mod progress;
pub mod prompt;

pub use output::Output;
pub use prompt::{Prompt, TerminalPrompt};
