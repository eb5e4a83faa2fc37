//! Permission bit helpers.

use std::path::Path;

use crate::core::Result;

/// Add execute permission for owner, group and other (`chmod +x`).
///
/// Existing permission bits are kept. On non-Unix platforms this is a no-op.
///
/// # Errors
///
/// Returns [`ScaffoldError::FileSystem`](crate::core::ScaffoldError::FileSystem)
/// if the metadata cannot be read or the new mode cannot be applied.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use crate::core::ScaffoldError;
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)
        .map_err(|e| ScaffoldError::fs("read permissions of", path, e))?
        .permissions();
    perms.set_mode(perms.mode() | 0o111);
    std::fs::set_permissions(path, perms)
        .map_err(|e| ScaffoldError::fs("set permissions on", path, e))?;

    tracing::debug!("Marked {} executable", path.display());
    Ok(())
}

#[cfg(not(unix))]
pub fn make_executable(path: &Path) -> Result<()> {
    tracing::debug!("Skipping chmod +x for {} on this platform", path.display());
    Ok(())
}
