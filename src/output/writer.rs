//! Write strategies for rendered templates.
//!
//! All writers share one rule: an existing entry at the target path is
//! backed up before the new content goes in, and the content itself is
//! written atomically.

use std::path::{Path, PathBuf};

use super::notebook::{Notebook, notebook_file_name};
use crate::core::{Result, ScaffoldError};
use crate::utils::fs::{atomic_write, backup, make_executable};

/// Write `rendered` verbatim to `dir/file_name`.
///
/// # Errors
///
/// Returns [`ScaffoldError::FileSystem`] if the backup or write fails.
pub fn write_generic(dir: &Path, file_name: &str, rendered: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    backup(&path)?;
    atomic_write(&path, rendered.as_bytes())?;
    Ok(path)
}

/// Write a Python script. Same as [`write_generic`].
///
/// # Errors
///
/// Returns [`ScaffoldError::FileSystem`] if the backup or write fails.
pub fn write_python(dir: &Path, file_name: &str, rendered: &str) -> Result<PathBuf> {
    write_generic(dir, file_name, rendered)
}

/// Write a shell script and make it executable for owner, group and other.
///
/// # Errors
///
/// Returns [`ScaffoldError::FileSystem`] if the backup, write or chmod fails.
pub fn write_shell(dir: &Path, file_name: &str, rendered: &str) -> Result<PathBuf> {
    let path = write_generic(dir, file_name, rendered)?;
    make_executable(&path)?;
    Ok(path)
}

/// Convert a rendered Python script into a notebook and write it as
/// `<stem>.ipynb`. The backup applies to the `.ipynb` path.
///
/// # Errors
///
/// Returns [`ScaffoldError::FileSystem`] if the backup or write fails.
pub fn write_notebook(dir: &Path, file_name: &str, rendered: &str) -> Result<PathBuf> {
    let notebook = Notebook::from_script(file_name, rendered);
    let json = notebook.to_json().map_err(|e| ScaffoldError::Other {
        message: format!("Failed to serialize notebook for {file_name}: {e}"),
    })?;

    let path = dir.join(notebook_file_name(file_name));
    backup(&path)?;
    atomic_write(&path, json.as_bytes())?;

    tracing::debug!("Converted {} into {} cell(s)", file_name, notebook.cells.len());
    Ok(path)
}
