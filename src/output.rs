//! Result delivery with atomic file replacement.
//!
//! The complete output string is always assembled before any write starts;
//! file destinations are replaced via a temp file in the same directory so
//! a crash mid-write never leaves a truncated document behind.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically replace `path` with `content`.
///
/// The temp file is created next to the destination so the final persist
/// is a same-filesystem rename.
pub fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Replace `path` with `content` unless it already holds exactly that text.
///
/// Returns true when a write happened. Skipping no-op writes keeps
/// idempotent re-runs cheap and stops watch mode from re-triggering on its
/// own output.
pub fn write_if_changed(path: &Path, content: &str, previous: &str) -> std::io::Result<bool> {
    if content == previous {
        log::debug!("output unchanged; skipping write to {}", path.display());
        return Ok(false);
    }
    write_atomic(path, content)?;
    Ok(true)
}
