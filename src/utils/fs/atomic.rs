//! Atomic file write operations using a temp-and-rename strategy.
//!
//! Generated files are interdependent, so a half-written script is worse
//! than a missing one. Content goes to a temporary file in the target's own
//! directory first and is renamed over the target only once fully synced.

use std::io::Write;
use std::path::Path;

use tempfile::Builder;

use crate::core::{Result, ScaffoldError};

/// Atomically writes bytes to a file.
///
/// 1. Writes `content` to a temporary file next to `path`
/// 2. Syncs the temporary file to disk
/// 3. Renames it onto `path`
///
/// The parent directory must already exist; the directory renderer creates
/// every directory explicitly.
///
/// On unix the file gets the mode `0o666` minus the process umask, as with
/// [`std::fs::write`].
///
/// # Errors
///
/// Returns [`ScaffoldError::FileSystem`] if any step fails. The temporary
/// file is removed on failure, leaving `path` untouched.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut temp = builder
        .tempfile_in(dir)
        .map_err(|e| ScaffoldError::fs("create temporary file in", dir, e))?;

    temp.write_all(content).map_err(|e| ScaffoldError::fs("write", temp.path(), e))?;
    temp.as_file().sync_all().map_err(|e| ScaffoldError::fs("sync", temp.path(), e))?;

    temp.persist(path).map_err(|e| ScaffoldError::fs("rename temporary file to", path, e.error))?;

    tracing::debug!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}
