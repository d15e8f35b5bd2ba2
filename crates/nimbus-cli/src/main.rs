//! Nimbus CLI entry point.

use colored::Colorize;
use nimbus_cli::args::GlobalFlags;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let argv: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let flags = GlobalFlags::scan(&argv);

    if flags.debug && std::env::var_os("RUST_LIB_BACKTRACE").is_none() {
        std::env::set_var("RUST_LIB_BACKTRACE", "1");
    }

    if let Err(e) = nimbus_core::log::init(flags.debug) {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }

    let code = nimbus_cli::execute(argv, &flags).await;
    std::process::exit(code);
}
