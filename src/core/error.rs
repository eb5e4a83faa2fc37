//! Error handling for msm-scaffold
//!
//! Every failure during a generation run is fatal: there is no retry and no
//! partial skip, because a single missing file would leave the dependency
//! symlinks of later directories dangling. This module provides:
//!
//! - [`ScaffoldError`] - the typed error returned by all library operations
//! - [`ErrorContext`] - a wrapper adding details and a suggestion for CLI users
//! - [`user_friendly_error`] - converts any [`anyhow::Error`] into an [`ErrorContext`]
//!
//! # Error Categories
//!
//! - **Lookup**: [`ScaffoldError::TemplateNotFound`]
//! - **Decode**: [`ScaffoldError::MetadataDecode`]
//! - **File System**: [`ScaffoldError::FileSystem`]
//! - **Render**: [`ScaffoldError::Render`]
//! - **Configuration**: [`ScaffoldError::Config`], [`ScaffoldError::InvalidLayout`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use msm_scaffold::core::{ScaffoldError, user_friendly_error};
//!
//! let error = ScaffoldError::TemplateNotFound {
//!     name: "tica/tica.py".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display();
//! ```

use colored::Colorize;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for scaffold generation.
///
/// Each variant names one fatal failure mode of a generation run. File system
/// failures keep the operation and the path that failed so the CLI can point
/// at the offending entry.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// A declared template name has no backing source in the template store.
    #[error("Template '{name}' not found in the template store")]
    TemplateNotFound {
        /// Template name as declared in the layout
        name: String,
    },

    /// The embedded metadata block of a template could not be decoded.
    #[error("Invalid metadata block in template '{template}': {reason}")]
    MetadataDecode {
        /// Template name
        template: String,
        /// Decoder message
        reason: String,
    },

    /// The template engine failed to produce text.
    #[error("Failed to render template '{template}': {reason}")]
    Render {
        /// Template name
        template: String,
        /// Engine message with internal template names stripped
        reason: String,
    },

    /// A create/rename/link/chmod/write operation failed.
    #[error("File system error: failed to {operation} '{}'", path.display())]
    FileSystem {
        /// Human-readable operation, e.g. "create directory"
        operation: String,
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The declared layout tree would clobber its own output.
    #[error("Invalid layout: {reason}")]
    InvalidLayout {
        /// What collided
        reason: String,
    },

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// Catch-all for errors that do not fit another category.
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl ScaffoldError {
    /// Build a [`ScaffoldError::FileSystem`] for `operation` on `path`.
    pub fn fs(operation: impl Into<String>, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

/// Error wrapper carrying user-facing details and a suggestion.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ScaffoldError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with no details or suggestion.
    #[must_use]
    pub const fn new(error: ScaffoldError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr: error in red, details in yellow, suggestion in green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// Recognizes [`ScaffoldError`] anywhere in the chain and raw
/// [`std::io::Error`]s; everything else is wrapped as
/// [`ScaffoldError::Other`] with the full context chain as its message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let chain = format!("{error:#}");

    let error = match error.downcast::<ScaffoldError>() {
        Ok(scaffold_error) => return create_error_context(scaffold_error),
        Err(error) => error,
    };

    if let Some(io_error) = error.chain().find_map(|e| e.downcast_ref::<io::Error>()) {
        let ctx = ErrorContext::new(ScaffoldError::Other {
            message: chain,
        });
        return match io_error.kind() {
            io::ErrorKind::PermissionDenied => ctx
                .with_suggestion("Check that you can write to the output directory")
                .with_details("The generator needs to create files, directories and symlinks"),
            io::ErrorKind::NotFound => ctx
                .with_suggestion("Check that the file or directory exists and the path is correct"),
            _ => ctx,
        };
    }

    ErrorContext::new(ScaffoldError::Other {
        message: chain,
    })
}

fn create_error_context(error: ScaffoldError) -> ErrorContext {
    match &error {
        ScaffoldError::TemplateNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check --template-dir, or run 'msm-scaffold layout' to list bundled templates")
            .with_details("Every file named in the layout must exist in the template store"),
        ScaffoldError::MetadataDecode {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Fix the YAML between the 'Meta' and '----' markers of the template")
            .with_details("Metadata must be a YAML mapping; 'depends' must be a list of file names"),
        ScaffoldError::Render {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Templates may only reference 'header' and 'date'"),
        ScaffoldError::FileSystem {
            source,
            ..
        } => {
            let suggestion = match source.kind() {
                io::ErrorKind::PermissionDenied => {
                    "Check that you can write to the output directory"
                }
                io::ErrorKind::AlreadyExists => {
                    "Remove the conflicting entry and run the generator again"
                }
                _ => "Check free disk space and permissions of the output directory",
            };
            let details = source.to_string();
            ErrorContext::new(error).with_suggestion(suggestion).with_details(details)
        }
        ScaffoldError::InvalidLayout {
            ..
        } => ErrorContext::new(error)
            .with_details("File and subdirectory names must be unique within a directory"),
        ScaffoldError::Config {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the syntax of the configuration file or pass --config"),
        ScaffoldError::Other {
            ..
        } => ErrorContext::new(error),
    }
}
