//! Process exit codes returned by command handlers.
//!
//! Handlers return plain integers so that a delegate's own code can be
//! passed through unchanged; these are the codes the handlers themselves
//! produce.

/// The command completed.
pub const SUCCESS: i32 = 0;

/// Argument validation or runtime failure.
pub const ERROR: i32 = 1;

/// Usage information was displayed instead of running the command.
pub const HELP: i32 = 2;
