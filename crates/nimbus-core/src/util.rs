//! Common utility functions.

pub mod fs;
pub mod text;

// Re-export commonly used items
pub use fs::{is_empty_dir, to_human_path};
pub use text::did_you_mean;
