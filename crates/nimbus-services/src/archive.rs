//! Unpacking of downloaded example tarballs.

use flate2::read::GzDecoder;
use nimbus_types::{NimbusError, Result};
use std::path::Path;
use tar::Archive;

/// Unpack a gzipped tarball into `dest`.
///
/// Entries land relative to `dest`; existing files are overwritten.
/// Entries that would escape `dest` are skipped by `tar` itself.
pub fn unpack(bytes: &[u8], dest: impl AsRef<Path>) -> Result<()> {
    let dest = dest.as_ref();
    tracing::debug!("Unpacking {} bytes into {:?}", bytes.len(), dest);

    let decoder = GzDecoder::new(bytes);
    let mut archive = Archive::new(decoder);
    archive.set_overwrite(true);

    archive.unpack(dest)
        .map_err(|e| NimbusError::Archive(format!("Failed to extract tarball: {}", e)))?;

    Ok(())
}
