//! Output writer dispatch.
//!
//! A rendered template becomes exactly one artifact on disk. Which writer
//! produces it depends on the kind of file the template generates:
//!
//! | Output kind | Default writer | Notebook mode |
//! |-------------|----------------|---------------|
//! | `.py`       | [`WriterKind::Python`] | [`WriterKind::Notebook`] |
//! | `.sh`       | [`WriterKind::Shell`]  | [`WriterKind::Shell`]    |
//! | other       | [`WriterKind::Generic`] | [`WriterKind::Generic`] |
//!
//! Every writer backs up an existing entry before writing (see
//! [`crate::utils::fs::backup`]).

pub mod notebook;
pub mod writer;

use std::path::{Path, PathBuf};

use crate::core::Result;

pub use notebook::{Cell, Notebook, notebook_file_name, split_cells};

/// Classification of a generated file by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    /// `.py` script
    Python,
    /// `.sh` script
    Shell,
    /// Any other extension, or none
    Other,
}

impl OutputKind {
    /// Classify `file_name` by the text after its last `.`.
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Self {
        match Path::new(file_name).extension().and_then(|e| e.to_str()) {
            Some("py") => Self::Python,
            Some("sh") => Self::Shell,
            _ => Self::Other,
        }
    }
}

/// Write strategy for one rendered template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriterKind {
    /// Write the text verbatim
    Generic,
    /// Same as generic; separate route for Python scripts
    Python,
    /// Write, then add execute bits
    Shell,
    /// Convert a Python script into a notebook document
    Notebook,
}

impl WriterKind {
    /// Write `rendered` into `dir` under `file_name` with this strategy.
    ///
    /// Returns the path actually written (the notebook writer changes the
    /// extension to `.ipynb`).
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::FileSystem`](crate::core::ScaffoldError::FileSystem)
    /// if the backup or the write fails.
    pub fn write(self, dir: &Path, file_name: &str, rendered: &str) -> Result<PathBuf> {
        match self {
            Self::Generic => writer::write_generic(dir, file_name, rendered),
            Self::Python => writer::write_python(dir, file_name, rendered),
            Self::Shell => writer::write_shell(dir, file_name, rendered),
            Self::Notebook => writer::write_notebook(dir, file_name, rendered),
        }
    }
}

/// Route table from [`OutputKind`] to [`WriterKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterRoutes {
    python: WriterKind,
    shell: WriterKind,
    other: WriterKind,
}

impl Default for WriterRoutes {
    fn default() -> Self {
        Self {
            python: WriterKind::Python,
            shell: WriterKind::Shell,
            other: WriterKind::Generic,
        }
    }
}

impl WriterRoutes {
    /// Default routes, with Python scripts sent to the notebook writer when
    /// `notebook` is set.
    #[must_use]
    pub fn new(notebook: bool) -> Self {
        let mut routes = Self::default();
        if notebook {
            routes.python = WriterKind::Notebook;
        }
        routes
    }

    /// Writer for a given output kind.
    #[must_use]
    pub const fn route(&self, kind: OutputKind) -> WriterKind {
        match kind {
            OutputKind::Python => self.python,
            OutputKind::Shell => self.shell,
            OutputKind::Other => self.other,
        }
    }

    /// Writer for a given file name.
    #[must_use]
    pub fn for_file(&self, file_name: &str) -> WriterKind {
        self.route(OutputKind::from_file_name(file_name))
    }
}
