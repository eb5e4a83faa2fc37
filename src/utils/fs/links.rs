//! Dependency symlinks between generated directories.

use std::path::{Path, PathBuf};

use super::backup::entry_exists;
use crate::core::{Result, ScaffoldError};

/// Link a dependency produced by an ancestor directory into `dir`.
///
/// The link is named after the dependency's base name and points at
/// `../<dependency>`, i.e. the dependency path is resolved relative to the
/// parent of `dir`. Returns `true` if a link was created and `false` if an
/// entry with that name already existed (the call is then a no-op).
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidLayout`] if the dependency has no file name
/// (`..`, empty), or [`ScaffoldError::FileSystem`] if the link cannot be created.
pub fn ensure_link(dir: &Path, dependency: &str) -> Result<bool> {
    let base_name = Path::new(dependency).file_name().ok_or_else(|| ScaffoldError::InvalidLayout {
        reason: format!("dependency '{dependency}' does not name a file"),
    })?;

    let link = dir.join(base_name);
    if entry_exists(&link) {
        tracing::debug!("Dependency link {} already present", link.display());
        return Ok(false);
    }

    let target = link_target(dependency);
    symlink(&target, &link).map_err(|e| ScaffoldError::fs("create symlink", &link, e))?;

    tracing::debug!("Linked {} -> {}", link.display(), target.display());
    Ok(true)
}

/// Relative target of the link for `dependency`: one level up from the node.
pub(crate) fn link_target(dependency: &str) -> PathBuf {
    Path::new("..").join(dependency)
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    let resolved = link.parent().map(|p| p.join(target)).unwrap_or_else(|| target.to_path_buf());
    if resolved.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}
