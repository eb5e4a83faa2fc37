//! Options shared by commands that render templates.

use clap::Args;
use std::path::PathBuf;

use crate::config::GlobalConfig;
use crate::templating::{DirStore, EmbeddedStore, TemplateLoader};

/// Where templates come from and how Python templates are written.
#[derive(Args, Debug, Clone, Default)]
pub struct TemplateOptions {
    /// Write Python templates as Jupyter notebooks (`.ipynb`)
    ///
    /// Each `## Heading` line in a script starts a new markdown cell followed
    /// by a code cell holding the section body.
    #[arg(long)]
    pub ipynb: bool,

    /// Read templates from this directory instead of the bundled set
    ///
    /// The directory must mirror the bundled naming, e.g.
    /// `tica/cluster/cluster.py`. A metadata block opens with `Meta` and
    /// `----` lines and must be closed by another `----` line; msmbuilder's
    /// own templates, which end the block at the closing `"""`, need that
    /// line added.
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,
}

impl TemplateOptions {
    /// Notebook mode from the flag, falling back to the config file.
    #[must_use]
    pub fn notebook(&self, config: &GlobalConfig) -> bool {
        self.ipynb || config.ipynb
    }

    /// Template directory from the flag, falling back to the config file.
    #[must_use]
    pub fn template_dir(&self, config: &GlobalConfig) -> Option<PathBuf> {
        self.template_dir.clone().or_else(|| config.template_dir.clone())
    }

    /// Loader over the selected template source.
    #[must_use]
    pub fn loader(&self, config: &GlobalConfig) -> TemplateLoader {
        match self.template_dir(config) {
            Some(dir) => TemplateLoader::new(DirStore::new(dir)),
            None => TemplateLoader::new(EmbeddedStore),
        }
    }
}
