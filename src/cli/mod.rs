//! Command-line interface for msm-scaffold.
//!
//! # Available Commands
//!
//! - `new` - Render the bundled MSM analysis project into a directory
//! - `layout` - Show the directory tree and each directory's dependencies
//! - `render` - Render a single template
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - Debug logging
//! - `--quiet` / `-q` - Errors only
//! - `--config <PATH>` - Use a specific configuration file
//!
//! `RUST_LOG`, when set, takes precedence over both verbosity flags.
//!
//! # Examples
//!
//! ```bash
//! msm-scaffold new my-project
//! msm-scaffold --verbose new --ipynb my-notebooks
//! msm-scaffold layout --format json
//! msm-scaffold render tica/tica.py --stdout
//! ```

pub mod common;
mod layout;
mod new;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::GlobalConfig;

pub use layout::{LayoutEntry, LayoutFormat, render_tree};

/// Runtime configuration derived from global flags.
///
/// Kept separate from [`Cli`] so tests can build one without parsing
/// arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is not set.
    pub log_level: String,

    /// Explicit configuration file, overriding the default location.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Install the global tracing subscriber. Later calls are no-ops.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("msm_scaffold={}", self.log_level)));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Load the global configuration this run should use.
    ///
    /// # Errors
    ///
    /// Fails if the configuration file exists but cannot be read or parsed.
    pub fn load_global(&self) -> Result<GlobalConfig> {
        Ok(GlobalConfig::load_with_optional(self.config_path.clone())?)
    }
}

/// Generate MSMBuilder analysis project skeletons.
#[derive(Parser, Debug)]
#[command(name = "msm-scaffold", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file (default `$MSM_SCAFFOLD_CONFIG`, then
    /// `~/.msm-scaffold/config.toml`)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new project from the bundled layout
    New(new::NewCommand),

    /// Show the project layout and the dependencies of each directory
    Layout(layout::LayoutCommand),

    /// Render a single template
    Render(render::RenderCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// # Errors
    ///
    /// Returns any error from loading configuration or running the command.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config)
    }

    /// Translate global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
            config_path: self.config.clone(),
        }
    }

    /// Execute with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns any error from loading configuration or running the command.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();
        let global = config.load_global()?;
        tracing::debug!("Using configuration {:?}", global);

        match self.command {
            Commands::New(cmd) => cmd.execute(&global),
            Commands::Layout(cmd) => cmd.execute(&global),
            Commands::Render(cmd) => cmd.execute(&global),
        }
    }
}
