//! Example descriptors served by the example-files service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An entry of the example list.
///
/// Hidden examples are legacy entries: they can still be initialized by
/// name but are not offered in the interactive picker and are downloaded
/// from the v1 archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Example identifier, also the default destination folder
    pub name: String,
    /// Whether the example is listed for selection
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Example {
    /// Create a visible example.
    pub fn visible(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
        }
    }

    /// Create a hidden (legacy) example.
    pub fn hidden(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: false,
        }
    }
}

/// Archive generation an example is downloaded from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleVersion {
    /// Legacy archive, used for hidden examples
    V1,
    /// Current archive
    #[default]
    V2,
}

impl ExampleVersion {
    /// Path segment used by the service.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExampleVersion::V1 => "v1",
            ExampleVersion::V2 => "v2",
        }
    }
}

impl fmt::Display for ExampleVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
