//! Filesystem utilities.

use nimbus_types::Result;
use std::fs;
use std::path::Path;

/// Render a path for humans, replacing the home directory with `~`.
pub fn to_human_path(path: impl AsRef<Path>) -> String {
    humanize(path.as_ref(), dirs::home_dir().as_deref())
}

fn humanize(path: &Path, home: Option<&Path>) -> String {
    match home.and_then(|home| path.strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => Path::new("~").join(rest).display().to_string(),
        None => path.display().to_string(),
    }
}

/// Whether a directory has no entries.
pub fn is_empty_dir(path: impl AsRef<Path>) -> Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}
