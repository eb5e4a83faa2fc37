//! Backup-before-write.
//!
//! Rerunning the generator must never destroy earlier output. Any existing
//! entry at a target path (file, directory or symlink, dangling or not) is
//! renamed to `<name>.bak.<N>` using the smallest free `N >= 1`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::BACKUP_INFIX;
use crate::core::{Result, ScaffoldError};

/// Move an existing entry at `path` aside.
///
/// Returns the backup path when something was moved, `None` when `path` did
/// not exist. Existence is checked without following symlinks so that a
/// dangling link is backed up too.
///
/// # Errors
///
/// Returns [`ScaffoldError::FileSystem`] if the rename fails.
pub fn backup(path: &Path) -> Result<Option<PathBuf>> {
    if !entry_exists(path) {
        return Ok(None);
    }

    let backup_path = next_backup_path(path);
    fs::rename(path, &backup_path).map_err(|e| ScaffoldError::fs("back up", path, e))?;

    tracing::warn!("{} exists. Moving it to {}", path.display(), backup_path.display());
    Ok(Some(backup_path))
}

/// Back up whatever is at `path`, then create an empty directory there.
///
/// # Errors
///
/// Returns [`ScaffoldError::FileSystem`] if the backup or the creation fails.
pub fn create_fresh_dir(path: &Path) -> Result<()> {
    backup(path)?;
    fs::create_dir(path).map_err(|e| ScaffoldError::fs("create directory", path, e))?;
    tracing::debug!("Created directory {}", path.display());
    Ok(())
}

/// True if anything, including a dangling symlink, exists at `path`.
pub(crate) fn entry_exists(path: &Path) -> bool {
    match fs::symlink_metadata(path) {
        Ok(_) => true,
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        // Unreadable parent etc.: report present so the following
        // operation surfaces the real error.
        Err(_) => true,
    }
}

fn next_backup_path(path: &Path) -> PathBuf {
    let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();

    let mut number = 1u32;
    loop {
        let candidate = path.with_file_name(format!("{file_name}.{BACKUP_INFIX}.{number}"));
        if !entry_exists(&candidate) {
            return candidate;
        }
        number += 1;
    }
}
