//! Logging system for nimbus.
//!
//! Library code emits `tracing` events; this module installs the
//! subscriber that renders them on stderr. `RUST_LOG` takes precedence
//! over the `--debug` flag.

use nimbus_types::{NimbusError, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "nimbus=debug"
    } else {
        "nimbus=warn"
    }
}

/// Initialize the logging system.
///
/// Fails if a global subscriber is already installed.
pub fn init(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init()
        .map_err(|e| NimbusError::Other(format!("Failed to initialize logging: {}", e)))
}
