//! Shared helpers for integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// One entry of a directory snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Dir,
    File(String),
    Link(PathBuf),
}

/// Every entry under `root`, keyed by relative path, in sorted order.
///
/// Symlinks are recorded with their target and not followed.
pub fn snapshot(root: &Path) -> Vec<(PathBuf, Entry)> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let relative = entry.path().strip_prefix(root).unwrap().to_path_buf();
            let kind = if entry.path_is_symlink() {
                Entry::Link(fs::read_link(entry.path()).unwrap())
            } else if entry.file_type().is_dir() {
                Entry::Dir
            } else {
                Entry::File(fs::read_to_string(entry.path()).unwrap())
            };
            (relative, kind)
        })
        .collect()
}

/// Relative paths of entries whose name contains `.bak.`.
pub fn backups(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().contains(".bak."))
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

/// The `msm-scaffold` binary with an isolated, empty configuration.
pub struct Cli {
    pub config_dir: TempDir,
}

impl Cli {
    pub fn new() -> Self {
        Self {
            config_dir: TempDir::new().unwrap(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().join("config.toml")
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("msm-scaffold").unwrap();
        cmd.env("MSM_SCAFFOLD_CONFIG", self.config_path())
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}
