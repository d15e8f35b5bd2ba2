//! Progress indicators and spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for long-running operations.
///
/// The spinner draws on stderr and stays hidden when stderr is not a
/// terminal.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
