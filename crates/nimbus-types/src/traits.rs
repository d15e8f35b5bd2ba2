//! Core trait definitions for nimbus abstractions.

use async_trait::async_trait;
use crate::errors::Result;
use crate::example::{Example, ExampleVersion};

/// Trait for sources of project examples.
///
/// Implementers list the available examples and hand out the gzipped
/// tarball of a single example.
#[async_trait]
pub trait ExampleSource: Send + Sync {
    /// Fetch the full example list, hidden entries included.
    async fn list(&self) -> Result<Vec<Example>>;

    /// Download the gzipped tarball of an example.
    async fn download(&self, name: &str, version: ExampleVersion) -> Result<Vec<u8>>;

    /// Base URL of the source, for diagnostics.
    fn base_url(&self) -> &str;
}
