//! User-facing output.
//!
//! Results go to stdout; logs, errors, debug lines and spinners go to
//! stderr so piping a command's output stays clean.

use indicatif::ProgressBar;
use nimbus_core::term::Palette;
use nimbus_types::NimbusError;
use parking_lot::Mutex;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::io::{self, Write};

use super::progress;
use crate::args::GlobalFlags;

type Stream = Mutex<Box<dyn Write + Send>>;

/// Printer shared by every command.
pub struct Output {
    palette: Palette,
    debug: bool,
    spinners: bool,
    stdout: Stream,
    stderr: Stream,
    spinner: Mutex<Option<ProgressBar>>,
}

impl Output {
    /// Output bound to the process streams.
    pub fn new(palette: Palette, debug: bool) -> Self {
        let mut output = Self::with_writers(
            palette,
            debug,
            Box::new(io::stdout()),
            Box::new(io::stderr()),
        );
        output.spinners = true;
        output
    }

    /// Output styled according to the global flags.
    pub fn for_flags(flags: &GlobalFlags) -> Self {
        Self::new(Palette::detect(flags.no_color), flags.debug)
    }

    /// Output bound to arbitrary writers. Spinners are disabled.
    pub fn with_writers(
        palette: Palette,
        debug: bool,
        stdout: Box<dyn Write + Send>,
        stderr: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            palette,
            debug,
            spinners: false,
            stdout: Mutex::new(stdout),
            stderr: Mutex::new(stderr),
            spinner: Mutex::new(None),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Write `text` to stdout as is.
    pub fn print(&self, text: &str) {
        self.stop_spinner();
        let mut out = self.stdout.lock();
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }

    /// `> message` on stderr.
    pub fn log(&self, message: &str) {
        self.err_line(&format!("{} {}", self.palette.gray(">"), message));
    }

    /// `> Success! message` on stderr.
    pub fn success(&self, message: &str) {
        self.err_line(&format!("{} {}", self.palette.green("> Success!"), message));
    }

    /// `Error: message` on stderr.
    pub fn error(&self, message: &str) {
        self.err_line(&format!("{} {}", self.palette.red("Error:"), message));
    }

    /// `> [debug] message` on stderr, only in debug mode.
    pub fn debug(&self, message: &str) {
        if self.debug {
            self.err_line(&format!("{} {}", self.palette.gray("> [debug]"), message));
        }
    }

    /// Print a command failure with its whole cause chain on one line.
    pub fn pretty_error(&self, err: &anyhow::Error) {
        if let Some(NimbusError::Aborted) = err.downcast_ref::<NimbusError>() {
            self.log("Aborted");
            return;
        }
        self.error(&format!("{:#}", err));
    }

    /// Emit a captured backtrace at debug verbosity.
    pub fn backtrace(&self, trace: &Backtrace) {
        if trace.status() == BacktraceStatus::Captured {
            self.debug(&trace.to_string());
        }
    }

    /// Report an error raised before a command could run.
    pub fn handle_error(&self, err: &NimbusError) {
        match err {
            NimbusError::Aborted => self.log("Aborted"),
            err => {
                self.error(&err.to_string());
                if !err.is_user_error() {
                    self.debug(&format!("{:?}", err));
                }
            }
        }
    }

    /// Show a spinner, replacing any current one.
    pub fn spinner(&self, message: &str) {
        if !self.spinners {
            return;
        }
        let mut slot = self.spinner.lock();
        if let Some(previous) = slot.take() {
            previous.finish_and_clear();
        }
        *slot = Some(progress::spinner(message));
    }

    /// Remove the current spinner, if any.
    pub fn stop_spinner(&self) {
        if let Some(spinner) = self.spinner.lock().take() {
            spinner.finish_and_clear();
        }
    }

    fn err_line(&self, line: &str) {
        self.stop_spinner();
        let mut err = self.stderr.lock();
        let _ = writeln!(err, "{}", line);
        let _ = err.flush();
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output")
            .field("palette", &self.palette)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}
