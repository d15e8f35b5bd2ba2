//! Top-level dispatch of `nimbus <command>`.

use nimbus_core::term::Palette;
use nimbus_core::{APP_NAME, LOGO, VERSION};
use nimbus_types::{exit, NimbusError};

use crate::args::{split_subcommand, CommandTable, GlobalFlags};
use crate::client::Client;
use crate::commands;
use crate::ui::Output;

/// Commands known to the binary, with their aliases.
pub const COMMANDS: CommandTable = CommandTable {
    commands: &[("init", &["init"])],
    default: None,
};

/// Run the command named in `argv` and return the process exit code.
pub async fn execute(argv: Vec<String>, flags: &GlobalFlags) -> i32 {
    let selected = split_subcommand(&flags.positionals, &COMMANDS);

    if selected.name.is_none() {
        let output = Output::for_flags(flags);
        return match flags.positionals.first() {
            Some(unknown) => {
                output.error(&format!(
                    "The specified command \"{}\" is not a valid {} command.",
                    unknown, APP_NAME
                ));
                exit::ERROR
            }
            None => {
                output.print(&usage(output.palette()));
                exit::HELP
            }
        };
    }

    let client = match Client::from_env(argv, flags) {
        Ok(client) => client,
        Err(err) => {
            Output::for_flags(flags).handle_error(&err);
            return exit::ERROR;
        }
    };

    tracing::debug!("Running {:?} with {:?}", selected.name, client.argv);

    match selected.name {
        Some("init") => commands::init::run(&client, &commands::init::ExampleInitializer).await,
        other => {
            client.output.handle_error(&NimbusError::Bug(format!(
                "No handler registered for {:?}",
                other
            )));
            exit::ERROR
        }
    }
}

/// Top-level usage text.
pub fn usage(palette: &Palette) -> String {
    format!(
        "
  {title} [command] [options]

  {commands}

    init  [example] [dir]  Initialize an example project

  {options}

    -h, --help                  Output usage information
    -d, --debug                 Debug mode [off]
    --no-color                  No color mode [off]
    -Q, --global-config PATH    Path to the global config file

  Run {hint} for command options. {version}

",
        title = palette.bold(format!("{} {}", LOGO, APP_NAME)),
        commands = palette.dim("Commands:"),
        options = palette.dim("Options:"),
        hint = palette.cmd(format!("{} <command> --help", APP_NAME)),
        version = palette.gray(format!("(v{})", VERSION)),
    )
}
