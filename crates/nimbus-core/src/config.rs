//! Configuration management for nimbus.
//!
//! ## Configuration Layers
//!
//! Configuration values are resolved in this priority order:
//! 1. Environment variables (`NIMBUS_*`)
//! 2. Values loaded from the YAML file
//! 3. Default values
//!
//! ## Example
//!
//! ```no_run
//! use nimbus_core::config::GlobalConfig;
//!
//! let config = GlobalConfig::load()?;
//! println!("examples come from {}", config.examples_url);
//! # Ok::<(), nimbus_core::NimbusError>(())
//! ```

use nimbus_types::{NimbusError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Environment variable overriding [`GlobalConfig::examples_url`].
pub const EXAMPLES_URL_ENV: &str = "NIMBUS_EXAMPLES_URL";

/// Environment variable overriding [`GlobalConfig::request_timeout`].
pub const REQUEST_TIMEOUT_ENV: &str = "NIMBUS_REQUEST_TIMEOUT";

/// Global nimbus configuration (~/.nimbus/config.yml).
///
/// This represents user-wide settings stored in the home directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Base URL of the example-files service
    #[serde(default = "default_examples_url")]
    pub examples_url: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_examples_url() -> String {
    "https://examples.nimbus.sh/".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl GlobalConfig {
    /// Load global configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Load global configuration from a specific path.
    ///
    /// A missing file yields the defaults; environment overrides are
    /// applied either way.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                NimbusError::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            Self::parse(&content).map_err(|e| match e {
                NimbusError::Config(msg) => {
                    NimbusError::Config(format!("{} ({})", msg, path.display()))
                }
                other => other,
            })?
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from YAML text.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| NimbusError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default path for global configuration.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| NimbusError::Config("Could not determine home directory".to_string()))?;
        Ok(home.join(".nimbus").join("config.yml"))
    }

    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup(EXAMPLES_URL_ENV) {
            self.examples_url = url;
        }
        if let Some(timeout) = lookup(REQUEST_TIMEOUT_ENV) {
            self.request_timeout = timeout.trim().parse().map_err(|_| {
                NimbusError::Config(format!(
                    "{} must be a number of seconds, got '{}'",
                    REQUEST_TIMEOUT_ENV, timeout
                ))
            })?;
        }
        Ok(())
    }

    /// Validate loaded values.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.examples_url).map_err(|e| {
            NimbusError::Config(format!("Invalid examples_url '{}': {}", self.examples_url, e))
        })?;
        if self.request_timeout == 0 {
            return Err(NimbusError::Config(
                "request_timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            examples_url: default_examples_url(),
            request_timeout: default_request_timeout(),
        }
    }
}
