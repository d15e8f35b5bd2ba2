//! `nimbus init`: start a project from an example.

pub mod scaffold;

pub use scaffold::{prepare_folder, ExampleInitializer};

use async_trait::async_trait;
use clap::Parser;
use nimbus_core::term::Palette;
use nimbus_core::{APP_NAME, LOGO};
use nimbus_types::exit;

use crate::args::{get_args, split_subcommand, CommandTable, CommonArgs};
use crate::client::Client;

const COMMAND_CONFIG: CommandTable = CommandTable {
    commands: &[("init", &["init"])],
    default: None,
};

/// Parsed `nimbus init` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "init",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct InitArgv {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Overwrite destination directory if exists
    #[arg(short, long)]
    pub force: bool,

    /// The command name followed by `[example] [dir]`
    #[arg(value_name = "ARGS")]
    pub positionals: Vec<String>,
}

/// Performs the actual project scaffolding once arguments are validated.
///
/// `args` holds at most two items: the example name and the destination
/// directory. The returned integer becomes the exit code unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Initializer: Send + Sync {
    async fn init(&self, client: &Client, argv: &InitArgv, args: &[String]) -> anyhow::Result<i32>;
}

/// Usage text for `nimbus init`.
pub fn help(palette: &Palette) -> String {
    let example = |cmd: &str| palette.cyan(format!("$ {} {}", APP_NAME, cmd));
    let dash = palette.gray("-");

    format!(
        "
  {title} [example] [dir] [-f | --force]

  {options}

    -h, --help        Output usage information
    -d, --debug       Debug mode [off]
    --no-color        No color mode [off]
    -f, --force       Overwrite destination directory if exists [off]

  {examples}

  {dash} Choose from all available examples

      {choose}

  {dash} Initialize example project into a new directory

      {into_new}

  {dash} Initialize example project into specified directory

      {into_dir}

  {dash} Initialize example project without checking

      {forced}

",
        title = palette.bold(format!("{} {} init", LOGO, APP_NAME)),
        options = palette.dim("Options:"),
        examples = palette.dim("Examples:"),
        dash = dash,
        choose = example("init"),
        into_new = example("init <example>"),
        into_dir = example("init <example> <dir>"),
        forced = example("init <example> --force"),
    )
}

/// Handle `nimbus init` and return the exit code.
///
/// `0` (or whatever the initializer returns) on success, `1` on any
/// failure, `2` when usage was printed.
pub async fn run<I: Initializer + ?Sized>(client: &Client, initializer: &I) -> i32 {
    let output = &client.output;

    let argv: InitArgv = match get_args(&client.argv) {
        Ok(argv) => argv,
        Err(err) => {
            output.handle_error(&err);
            return exit::ERROR;
        }
    };

    if argv.common.help {
        output.print(&help(output.palette()));
        return exit::HELP;
    }

    if argv.positionals.len() > 3 {
        output.error("Too much arguments.");
        return exit::ERROR;
    }

    let rest = argv.positionals.get(1..).unwrap_or_default();
    let args = split_subcommand(rest, &COMMAND_CONFIG).args;

    match initializer.init(client, &argv, &args).await {
        Ok(code) => code,
        Err(err) => {
            output.pretty_error(&err);
            output.backtrace(err.backtrace());
            exit::ERROR
        }
    }
}
