//! Render a single template.
//!
//! ```bash
//! msm-scaffold render tica/tica.py            # writes ./tica.py
//! msm-scaffold render --ipynb tica/tica.py    # writes ./tica.ipynb
//! msm-scaffold render --stdout README.md      # prints the rendered text
//! ```

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::Path;

use super::common::TemplateOptions;
use crate::config::GlobalConfig;
use crate::output::WriterRoutes;
use crate::templating::{Template, TemplateRenderer};

/// Render one template into the current directory.
#[derive(Args, Debug)]
pub struct RenderCommand {
    /// Template name, e.g. `tica/cluster/cluster.py`
    template: String,

    #[command(flatten)]
    templates: TemplateOptions,

    /// Print the rendered text instead of writing a file
    #[arg(long)]
    stdout: bool,
}

impl RenderCommand {
    /// Execute the command in the current directory.
    ///
    /// # Errors
    ///
    /// Fails if the template cannot be loaded, rendered or written.
    pub fn execute(self, config: &GlobalConfig) -> Result<()> {
        self.execute_in(config, Path::new("."))
    }

    fn execute_in(self, config: &GlobalConfig, dir: &Path) -> Result<()> {
        let mut loader = self.templates.loader(config);
        let routes = WriterRoutes::new(self.templates.notebook(config));
        let template = Template::load(&mut loader, &self.template, &routes)
            .with_context(|| format!("Failed to load {} from {}", self.template, loader.describe()))?;
        let renderer = TemplateRenderer::new();

        if self.stdout {
            print!("{}", template.render(&renderer)?);
            return Ok(());
        }

        let path = template.render_into(&renderer, dir)?;
        println!("{} Wrote {}", "✓".green(), path.display());

        let depends = template.metadata().depends();
        if !depends.is_empty() {
            println!("  {} {}", "expects:".bright_black(), depends.join(", "));
        }
        Ok(())
    }
}
