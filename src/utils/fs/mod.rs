//! File system operations used while rendering a project.
//!
//! Every function here is fatal-on-error: failures come back as
//! [`ScaffoldError::FileSystem`](crate::core::ScaffoldError::FileSystem)
//! carrying the operation and the path, and nothing is retried.
//!
//! # Key Features
//!
//! - **Atomic writes**: a file is written in full or not at all
//! - **Backup-before-write**: existing entries are renamed to `<name>.bak.<N>`
//! - **Permissions**: execute bits are added without clearing others
//! - **Links**: dependency symlinks are created once and left alone afterwards
//!
//! # Examples
//!
//! ```rust,no_run
//! use msm_scaffold::utils::fs::{atomic_write, backup};
//! use std::path::Path;
//!
//! # fn example() -> msm_scaffold::core::Result<()> {
//! let target = Path::new("tica.py");
//! backup(target)?;
//! atomic_write(target, b"import msmbuilder\n")?;
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod backup;
pub mod links;
pub mod permissions;

pub use atomic::atomic_write;
pub use backup::{backup, create_fresh_dir};
pub use links::ensure_link;
pub use permissions::make_executable;
