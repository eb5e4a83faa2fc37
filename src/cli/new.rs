//! Create a new MSM analysis project.
//!
//! # Examples
//!
//! ```bash
//! msm-scaffold new                    # render into the current directory
//! msm-scaffold new fs-peptide         # render into ./fs-peptide
//! msm-scaffold new --ipynb notebooks  # write scripts as notebooks
//! ```

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use super::common::TemplateOptions;
use crate::config::GlobalConfig;
use crate::generator::Generator;
use crate::layout::RenderSummary;

/// Render the bundled project layout into a directory.
#[derive(Args, Debug)]
pub struct NewCommand {
    /// Project directory (defaults to `output_dir` from the config file,
    /// then the current directory)
    ///
    /// Created if it does not exist. Existing files are backed up to
    /// `<name>.bak.<N>` rather than overwritten.
    path: Option<PathBuf>,

    #[command(flatten)]
    templates: TemplateOptions,
}

impl NewCommand {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Fails if the project directory cannot be created or any template
    /// fails to load, render or write.
    pub fn execute(self, config: &GlobalConfig) -> Result<()> {
        let target = self
            .path
            .clone()
            .or_else(|| config.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        if !target.exists() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create project directory {}", target.display()))?;
        }

        let summary = Generator::with_loader(self.templates.loader(config))
            .notebook(self.templates.notebook(config))
            .generate(&target)
            .with_context(|| format!("Failed to generate project in {}", target.display()))?;

        print_summary(&target, &summary);
        Ok(())
    }
}

fn print_summary(target: &std::path::Path, summary: &RenderSummary) {
    println!("{} Created MSM project in {}", "✓".green(), target.display().to_string().cyan());
    println!(
        "  {} files, {} directories, {} dependency links",
        summary.files, summary.directories, summary.links
    );
    println!("\n{}", "Next steps:".cyan());
    println!("  cd {}", target.display());
    println!("  python 0-test-install.py");
    println!("  python 1-get-example-data.py");
}
