//! # Nimbus Core
//!
//! Core utilities, configuration management and logging for the nimbus CLI.
//!
//! This crate provides:
//!
//! - **Configuration**: the global `config.yml` with environment overrides
//! - **Logging**: `tracing` subscriber setup driven by `--debug`
//! - **Terminal**: an injectable color palette and terminal detection
//! - **Utilities**: path humanization and fuzzy name matching
//!
//! ## Example
//!
//! ```no_run
//! use nimbus_core::{config::GlobalConfig, term::Palette};
//!
//! nimbus_core::log::init(false)?;
//! let config = GlobalConfig::load()?;
//! let palette = Palette::detect(false);
//! println!("{}", palette.bold(config.examples_url));
//! # Ok::<(), nimbus_core::NimbusError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod log;
pub mod term;
pub mod util;

// Re-export commonly used items
pub use config::GlobalConfig;
pub use nimbus_types::{NimbusError, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name, also the binary name
pub const APP_NAME: &str = "nimbus";

/// Glyph printed in front of the application name in usage text
pub const LOGO: &str = "◆";
