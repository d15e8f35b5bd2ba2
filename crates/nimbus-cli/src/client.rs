//! Per-invocation context handed to every command.

use nimbus_core::term;
use nimbus_core::GlobalConfig;
use nimbus_services::{ExampleClient, ExampleClientConfig};
use nimbus_types::{ExampleSource, Result};
use std::path::PathBuf;
use std::sync::Arc;

use crate::args::GlobalFlags;
use crate::ui::{Output, Prompt, TerminalPrompt};

/// Everything a command needs from the outside world.
pub struct Client {
    /// Arguments after the program name.
    pub argv: Vec<String>,
    pub cwd: PathBuf,
    pub output: Output,
    pub config: GlobalConfig,
    pub examples: Arc<dyn ExampleSource>,
    pub prompt: Arc<dyn Prompt>,
    pub stdin_is_tty: bool,
    pub stdout_is_tty: bool,
}

impl Client {
    /// Build the client for this process.
    ///
    /// Fails when the global config cannot be loaded or names an unusable
    /// examples URL.
    pub fn from_env(argv: Vec<String>, flags: &GlobalFlags) -> Result<Self> {
        let config = match &flags.global_config {
            Some(path) => GlobalConfig::load_from(path)?,
            None => GlobalConfig::load()?,
        };

        let output = Output::for_flags(flags);
        output.debug(&format!("Using examples from {}", config.examples_url));

        let examples = ExampleClient::new(ExampleClientConfig {
            url: config.examples_url.clone(),
            timeout: config.timeout(),
        })?;

        Ok(Self {
            argv,
            cwd: std::env::current_dir()?,
            output,
            config,
            examples: Arc::new(examples),
            prompt: Arc::new(TerminalPrompt),
            stdin_is_tty: term::stdin_is_terminal(),
            stdout_is_tty: term::in_controlling_terminal(),
        })
    }
}
