//! Atomic persistence of rendered archives
//!
//! The byte stream is written to a temporary file in the destination
//! directory and renamed into place. An interrupted write never leaves a
//! truncated file at the destination, and an existing destination is only
//! ever replaced by a complete archive. The temporary file is cleaned up
//! on every exit path.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Write rendered bytes to the destination path atomically
///
/// Parent directories are created as needed.
///
/// # Errors
/// * `Io` - the directory could not be created, the temporary file could
///   not be written, or the rename failed; the destination is untouched
pub fn persist(bytes: &[u8], path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    // Atomic rename; the NamedTempFile guard removes the temporary file
    // if anything above failed
    tmp.persist(path).map_err(|e| e.error)?;

    log::debug!("persisted {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
