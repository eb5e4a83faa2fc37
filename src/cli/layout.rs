//! Show the project layout without writing anything.
//!
//! Each directory lists the files it renders and the dependency links it
//! will receive from its parent:
//!
//! ```text
//! (project root)
//! ├── 0-test-install.py
//! ├── 1-get-example-data.py
//! ├── README.md
//! └── analysis/  ← trajs, top.pdb
//!     ├── gather-metadata.py
//!     ...
//! ```

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

use super::common::TemplateOptions;
use crate::config::GlobalConfig;
use crate::layout::{TemplateDir, project_layout};
use crate::templating::TemplateLoader;

/// Output format for `layout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutFormat {
    /// Tree with box-drawing characters
    Text,
    /// JSON for scripting
    Json,
}

/// Print the declared directory tree with each directory's dependencies.
#[derive(Args, Debug)]
pub struct LayoutCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = LayoutFormat::Text)]
    format: LayoutFormat,

    /// Read template metadata from this directory instead of the bundled set
    #[arg(long, value_name = "DIR")]
    template_dir: Option<PathBuf>,
}

/// One directory of the layout as shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutEntry {
    pub name: String,
    pub files: Vec<String>,
    pub depends: Vec<String>,
    pub children: Vec<LayoutEntry>,
}

impl LayoutEntry {
    /// Describe `dir` and its descendants, loading metadata for each file.
    ///
    /// # Errors
    ///
    /// Returns the first template lookup or metadata decode error.
    pub fn describe(dir: &TemplateDir, loader: &mut TemplateLoader) -> crate::core::Result<Self> {
        let files = dir
            .files()
            .iter()
            .map(|f| f.rsplit('/').next().unwrap_or(f).to_string())
            .collect();
        let depends = dir.dependencies(loader)?.into_vec();
        let children =
            dir.children().iter().map(|child| Self::describe(child, loader)).collect::<crate::core::Result<_>>()?;

        Ok(Self {
            name: dir.name().to_string(),
            files,
            depends,
            children,
        })
    }
}

impl LayoutCommand {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Fails if a template cannot be found or its metadata cannot be decoded.
    pub fn execute(self, config: &GlobalConfig) -> Result<()> {
        let options = TemplateOptions {
            ipynb: false,
            template_dir: self.template_dir,
        };
        let mut loader = options.loader(config);

        let layout = project_layout();
        layout.validate()?;
        let entry = LayoutEntry::describe(&layout, &mut loader)
            .with_context(|| format!("Failed to read template metadata from {}", loader.describe()))?;

        match self.format {
            LayoutFormat::Text => print!("{}", render_tree(&entry)),
            LayoutFormat::Json => println!("{}", serde_json::to_string_pretty(&entry)?),
        }
        Ok(())
    }
}

/// Render an entry as an indented tree.
#[must_use]
pub fn render_tree(root: &LayoutEntry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "(project root)".bold());
    write_children(&mut out, root, "");
    out
}

fn write_children(out: &mut String, entry: &LayoutEntry, prefix: &str) {
    let total = entry.files.len() + entry.children.len();
    let mut index = 0;

    for file in &entry.files {
        index += 1;
        let connector = if index == total { "└── " } else { "├── " };
        let _ = writeln!(out, "{prefix}{connector}{file}");
    }

    for child in &entry.children {
        index += 1;
        let is_last = index == total;
        let connector = if is_last { "└── " } else { "├── " };
        let depends = if child.depends.is_empty() {
            String::new()
        } else {
            format!("  ← {}", child.depends.join(", ")).bright_black().to_string()
        };
        let _ = writeln!(out, "{prefix}{connector}{}{depends}", format!("{}/", child.name).cyan());

        let child_prefix = if is_last { format!("{prefix}    ") } else { format!("{prefix}│   ") };
        write_children(out, child, &child_prefix);
    }
}
