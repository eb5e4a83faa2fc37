//! msm-scaffold - MSMBuilder project skeleton generator
//!
//! Renders a tree of text templates into a runnable analysis project:
//! Python scripts (or Jupyter notebooks), shell scripts and documentation,
//! arranged in directories that mirror the analysis pipeline.
//!
//! # Architecture Overview
//!
//! A generation run is one depth-first walk over a [`layout::TemplateDir`]
//! tree:
//!
//! 1. Each template's source is split into a body and a YAML metadata block
//!    ([`metadata`]); the block may declare `depends`, files from ancestor
//!    directories the script needs next to it.
//! 2. The body is rendered with Tera ([`templating`]) and written by the
//!    writer chosen from the output file's extension ([`output`]). Anything
//!    already at the target path is backed up first.
//! 3. After a directory's own files, each declared dependency is symlinked
//!    in from the parent directory.
//! 4. Child directories are created fresh and rendered the same way.
//!
//! The first failure aborts the run. The process working directory is never
//! changed; every operation takes an explicit path.
//!
//! # Core Modules
//!
//! - [`layout`] - Directory nodes, the render traversal and the bundled layout
//! - [`templating`] - Template stores, loading, caching and Tera rendering
//! - [`metadata`] - Metadata block extraction
//! - [`output`] - Writer dispatch and notebook conversion
//! - [`generator`] - One-call project generation
//!
//! ## Supporting Modules
//!
//! - [`cli`] - Command-line interface
//! - [`config`] - User configuration (`~/.msm-scaffold/config.toml`)
//! - [`core`] - Error types and user-facing error formatting
//! - [`constants`] - Marker strings, header text and notebook constants
//! - [`utils`] - Atomic writes, backups, permissions and symlinks
//!
//! # Example
//!
//! ```rust,no_run
//! use msm_scaffold::generator::Generator;
//! use msm_scaffold::templating::EmbeddedStore;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! std::fs::create_dir_all("fs-peptide")?;
//! let summary = Generator::new(EmbeddedStore).generate(Path::new("fs-peptide"))?;
//! println!("{} files, {} links", summary.files, summary.links);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;

pub mod layout;
pub mod metadata;
pub mod output;
pub mod templating;

pub mod generator;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
