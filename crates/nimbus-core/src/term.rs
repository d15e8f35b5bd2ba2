//! Terminal utilities for colored output.

use colored::Colorize;
use std::fmt::Display;
use std::io::{self, IsTerminal};

/// Check if we're running in a controlling terminal.
pub fn in_controlling_terminal() -> bool {
    io::stdout().is_terminal()
}

/// Check if stdin is attached to a terminal, i.e. prompts can be answered.
pub fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}

/// Text styling capability handed to everything that prints.
///
/// A disabled palette returns its input untouched, so output stays plain
/// under `--no-color`, `NO_COLOR`, pipes and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Create a palette with colors switched on or off.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A palette that never styles.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Pick colors from the `--no-color` flag, `NO_COLOR` and the terminal.
    pub fn detect(no_color: bool) -> Self {
        Self::new(!no_color && std::env::var_os("NO_COLOR").is_none() && in_controlling_terminal())
    }

    /// Bold text.
    pub fn bold(&self, text: impl Display) -> String {
        self.paint(text, |s| s.bold().to_string())
    }

    /// Dimmed text.
    pub fn dim(&self, text: impl Display) -> String {
        self.paint(text, |s| s.dimmed().to_string())
    }

    /// Gray text.
    pub fn gray(&self, text: impl Display) -> String {
        self.paint(text, |s| s.bright_black().to_string())
    }

    /// Cyan text.
    pub fn cyan(&self, text: impl Display) -> String {
        self.paint(text, |s| s.cyan().to_string())
    }

    /// Red text.
    pub fn red(&self, text: impl Display) -> String {
        self.paint(text, |s| s.red().to_string())
    }

    /// Green text.
    pub fn green(&self, text: impl Display) -> String {
        self.paint(text, |s| s.green().to_string())
    }

    /// A command the user can type, rendered as `` `cmd` `` in cyan.
    pub fn cmd(&self, text: impl Display) -> String {
        self.cyan(format!("`{}`", text))
    }

    fn paint(&self, text: impl Display, style: impl FnOnce(&str) -> String) -> String {
        let text = text.to_string();
        if self.enabled {
            style(&text)
        } else {
            text
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_leaves_text_alone() {
        let palette = Palette::plain();
        assert_eq!(palette.bold("init"), "init");
        assert_eq!(palette.red("Error:"), "Error:");
        assert_eq!(palette.cmd("--force"), "`--force`");
    }

    #[test]
    fn test_no_color_flag_wins() {
        assert_eq!(Palette::detect(true), Palette::plain());
    }

    #[test]
    fn test_enabled_palette_styles() {
        colored::control::set_override(true);
        let styled = Palette::new(true).bold("init");
        colored::control::unset_override();
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("init"));
    }
}
