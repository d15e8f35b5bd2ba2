//! # nimbus-cli
//!
//! Command handlers for the `nimbus` binary. Every handler takes a
//! [`Client`](client::Client) and returns the process exit code.

pub mod args;
pub mod cli;
pub mod client;
pub mod commands;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use cli::execute;
pub use client::Client;
