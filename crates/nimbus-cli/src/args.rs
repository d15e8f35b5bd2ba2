//! Argument plumbing shared by all commands.
//!
//! Commands receive the full argument vector (command name included) and
//! parse it themselves with [`get_args`]. [`GlobalFlags`] is a cheap
//! pre-scan used before any command is chosen, for logging, colors and
//! config location.

use clap::{Args, Parser};
use nimbus_types::{NimbusError, Result};
use std::path::PathBuf;

/// Flags every command accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct CommonArgs {
    /// Output usage information
    #[arg(short, long)]
    pub help: bool,

    /// Debug mode
    #[arg(short, long)]
    pub debug: bool,

    /// No color mode
    #[arg(long)]
    pub no_color: bool,

    /// Path to the global config file
    #[arg(short = 'Q', long, value_name = "PATH")]
    pub global_config: Option<PathBuf>,
}

/// Parse `argv` into a command's argument struct.
///
/// Failures become [`NimbusError::Args`] carrying clap's one-line
/// description, e.g. `unexpected argument '--bogus' found`.
pub fn get_args<T: Parser>(argv: &[String]) -> Result<T> {
    T::try_parse_from(argv).map_err(|err| NimbusError::Args(describe(&err)))
}

fn describe(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).trim().to_string()
}

/// Subcommands of a command, each with the aliases that select it.
#[derive(Debug, Clone, Copy)]
pub struct CommandTable {
    pub commands: &'static [(&'static str, &'static [&'static str])],
    pub default: Option<&'static str>,
}

impl CommandTable {
    /// Resolve an alias to its canonical subcommand name.
    pub fn lookup(&self, token: &str) -> Option<&'static str> {
        self.commands
            .iter()
            .find(|(_, aliases)| aliases.contains(&token))
            .map(|(name, _)| *name)
    }
}

/// Result of [`split_subcommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subcommand {
    pub name: Option<&'static str>,
    pub args: Vec<String>,
}

/// Split positional tokens into a subcommand and its arguments.
///
/// A first token matching an alias in `table` selects that subcommand and
/// is dropped from the arguments. Otherwise the table default (if any) is
/// selected and every token is an argument.
pub fn split_subcommand(tokens: &[String], table: &CommandTable) -> Subcommand {
    match tokens.split_first() {
        Some((first, rest)) => match table.lookup(first) {
            Some(name) => Subcommand {
                name: Some(name),
                args: rest.to_vec(),
            },
            None => Subcommand {
                name: table.default,
                args: tokens.to_vec(),
            },
        },
        None => Subcommand {
            name: table.default,
            args: Vec::new(),
        },
    }
}

/// Global flags found anywhere on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalFlags {
    pub help: bool,
    pub debug: bool,
    pub no_color: bool,
    pub global_config: Option<PathBuf>,
    /// Tokens that are not flags, in order.
    pub positionals: Vec<String>,
}

impl GlobalFlags {
    /// Scan `argv` without failing on flags owned by individual commands.
    ///
    /// Everything after `--` is positional.
    pub fn scan(argv: &[String]) -> Self {
        let mut flags = Self::default();
        let mut tokens = argv.iter();

        while let Some(token) = tokens.next() {
            match token.as_str() {
                "--" => {
                    flags.positionals.extend(tokens.by_ref().cloned());
                }
                "-h" | "--help" => flags.help = true,
                "-d" | "--debug" => flags.debug = true,
                "--no-color" => flags.no_color = true,
                "-Q" | "--global-config" => {
                    flags.global_config = tokens.next().map(PathBuf::from);
                }
                other => {
                    if let Some(path) = other.strip_prefix("--global-config=") {
                        flags.global_config = Some(PathBuf::from(path));
                    } else if !other.starts_with('-') || other == "-" {
                        flags.positionals.push(other.to_string());
                    }
                }
            }
        }

        flags
    }
}
