//! Error types for nimbus operations.

use thiserror::Error;

/// The main error type for nimbus operations.
///
/// Library crates return this type; the CLI layer wraps it in
/// `anyhow::Error` when it needs to attach context.
#[derive(Error, Debug)]
pub enum NimbusError {
    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command-line arguments could not be parsed
    #[error("{0}")]
    Args(String),

    /// The invocation is well-formed but cannot be acted upon
    #[error("{0}")]
    Usage(String),

    /// Example lookup or download error
    #[error("{0}")]
    Example(String),

    /// The destination folder cannot receive an example
    #[error("{0}")]
    Destination(String),

    /// Transport-level failure talking to a remote service
    #[error("Network error: {0}")]
    Network(String),

    /// A downloaded archive could not be unpacked
    #[error("Archive error: {0}")]
    Archive(String),

    /// The user cancelled an interactive prompt
    #[error("Aborted")]
    Aborted,

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Internal bug - should never happen in production
    #[error(
        "Bug detected: {0}\n\nThis is an internal error. Please report this issue at:\n\
         https://github.com/nimbus-platform/nimbus/issues"
    )]
    Bug(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl NimbusError {
    /// Whether the error was caused by the user rather than by nimbus or
    /// the network.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            NimbusError::Args(_)
                | NimbusError::Usage(_)
                | NimbusError::Destination(_)
                | NimbusError::Aborted
        )
    }
}

/// A specialized Result type for nimbus operations.
pub type Result<T> = std::result::Result<T, NimbusError>;

/// Helper macro to bail out with a NimbusError
///
/// This is used for expected error conditions.
///
/// # Example
///
/// ```ignore
/// if !dest.is_dir() {
///     bail!(Destination, "Destination path \"{}\" is not a directory.", folder);
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::NimbusError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::NimbusError::$variant(format!($fmt, $($arg)*)))
    };
    ($msg:expr) => {
        return Err($crate::NimbusError::Other($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::NimbusError::Other(format!($fmt, $($arg)*)))
    };
}
