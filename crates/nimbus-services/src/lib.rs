//! # Nimbus Services
//!
//! External service client implementations for nimbus.
//!
//! This crate provides:
//! - **Examples**: async client for the example-files service
//! - **Archive**: unpacking of downloaded example tarballs

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod archive;
pub mod examples;

pub use examples::{ExampleClient, ExampleClientConfig};
