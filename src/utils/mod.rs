//! Utilities shared by the writers and the directory renderer.
//!
//! - [`fs`] - atomic writes, backup-before-write, permission bits and symlinks

pub mod fs;

pub use fs::{atomic_write, backup, create_fresh_dir, ensure_link, make_executable};
