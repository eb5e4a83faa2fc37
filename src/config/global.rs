//! User-wide configuration for msm-scaffold.
//!
//! Settings live in a TOML file, by default `~/.msm-scaffold/config.toml`
//! (`%LOCALAPPDATA%\msm-scaffold\config.toml` on Windows). The location can
//! be overridden with the `MSM_SCAFFOLD_CONFIG` environment variable or the
//! `--config` command line flag.
//!
//! # File Format
//!
//! ```toml
//! # Write Python templates as Jupyter notebooks
//! ipynb = true
//!
//! # Read templates from a directory instead of the bundled set
//! template_dir = "/home/me/msm-templates"
//!
//! # Default target for `msm-scaffold new`
//! output_dir = "/home/me/projects/new-msm"
//! ```
//!
//! Every key is optional. Command line flags take precedence over values
//! from the file.
//!
//! # Examples
//!
//! ```rust,no_run
//! use msm_scaffold::config::GlobalConfig;
//!
//! # fn example() -> msm_scaffold::core::Result<()> {
//! let config = GlobalConfig::load()?;
//! if config.ipynb {
//!     println!("notebook mode is on by default");
//! }
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_ENV_VAR;
use crate::core::{Result, ScaffoldError};

/// Global configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Write `.py` templates as `.ipynb` notebooks.
    pub ipynb: bool,

    /// Directory to read templates from instead of the bundled set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,

    /// Default project directory for `new`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl GlobalConfig {
    /// Load configuration from the default location.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Config`] if the default path cannot be
    /// determined, or the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_with_optional(None)
    }

    /// Load configuration from `path` if given, else from the default
    /// location. A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Config`] if the file exists but cannot be
    /// read or parsed.
    pub fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };

        if path.exists() {
            Self::load_from(&path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Config`] if the file cannot be read, is not
    /// valid TOML, or has unknown keys or wrongly typed values.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ScaffoldError::Config {
            message: format!("Failed to read config from {}: {e}", path.display()),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ScaffoldError::Config {
            message: format!("Failed to parse config from {}: {}", path.display(), e.message()),
        })?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Path of the configuration file.
    ///
    /// `MSM_SCAFFOLD_CONFIG` wins when set and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Config`] if the home directory cannot be
    /// determined.
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| ScaffoldError::Config {
                    message: "Unable to determine local data directory".to_string(),
                })?
                .join("msm-scaffold")
        } else {
            dirs::home_dir()
                .ok_or_else(|| ScaffoldError::Config {
                    message: "Unable to determine home directory".to_string(),
                })?
                .join(".msm-scaffold")
        };

        Ok(config_dir.join("config.toml"))
    }
}
