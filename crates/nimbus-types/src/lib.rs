//! # Nimbus Types
//!
//! Core types, traits, and errors shared across all nimbus crates.
//!
//! This crate provides:
//!
//! - The [`NimbusError`] enum and the crate-wide [`Result`] alias
//! - Example descriptors served by the example-files service
//! - The [`ExampleSource`] trait implemented by service clients
//! - Process exit codes used by command handlers
//!
//! ## Example
//!
//! ```
//! use nimbus_types::{ExampleVersion, exit};
//!
//! assert_eq!(ExampleVersion::V2.to_string(), "v2");
//! assert_eq!(exit::HELP, 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod example;
pub mod exit;
pub mod traits;

// Re-export common types for convenience
pub use errors::{NimbusError, Result};
pub use example::{Example, ExampleVersion};
pub use traits::ExampleSource;
