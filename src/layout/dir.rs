//! Template directory nodes.
//!
//! A [`TemplateDir`] renders in three steps:
//!
//! 1. Each declared file is loaded, rendered and written in declared order,
//!    and its `depends` entries are collected into a [`DependencySet`].
//! 2. Each collected dependency is linked into the node's directory from its
//!    parent (see [`ensure_link`]).
//! 3. Each child gets a fresh subdirectory (an existing entry is backed up
//!    first) and is rendered into it.
//!
//! Paths are passed explicitly; the process working directory is never
//! changed. The first failure aborts the whole traversal.

use std::collections::HashSet;
use std::path::{Component, Path};

use super::context::RenderContext;
use crate::core::{Result, ScaffoldError};
use crate::templating::{Template, TemplateLoader};
use crate::utils::fs::{create_fresh_dir, ensure_link};

/// Distinct dependency names in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    names: Vec<String>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every name not already present, keeping their order.
    pub fn extend<'n>(&mut self, names: impl IntoIterator<Item = &'n String>) {
        for name in names {
            if !self.names.contains(name) {
                self.names.push(name.clone());
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

/// A directory of templates with nested child directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDir {
    name: String,
    files: Vec<String>,
    children: Vec<TemplateDir>,
}

impl TemplateDir {
    /// Create a node. `files` are template names as known to the store, e.g.
    /// `tica/cluster/cluster.py`; each is written under its base name.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        files: impl IntoIterator<Item = S>,
        children: Vec<TemplateDir>,
    ) -> Self {
        Self {
            name: name.into(),
            files: files.into_iter().map(Into::into).collect(),
            children,
        }
    }

    /// Create the root node, which has an empty name and renders directly
    /// into the target directory.
    pub fn root<S: Into<String>>(files: impl IntoIterator<Item = S>, children: Vec<TemplateDir>) -> Self {
        Self::new("", files, children)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    #[must_use]
    pub fn children(&self) -> &[TemplateDir] {
        &self.children
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    /// Check the tree for names that would clash on disk.
    ///
    /// Within one node, output file names (template base names) and child
    /// names must all be distinct. Every non-root node must be named by a
    /// single plain path component.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidLayout`] describing the first clash.
    pub fn validate(&self) -> Result<()> {
        self.validate_at(Path::new(""))
    }

    fn validate_at(&self, parent: &Path) -> Result<()> {
        let location = parent.join(&self.name);
        let invalid = |reason: String| ScaffoldError::InvalidLayout {
            reason,
        };

        let mut seen = HashSet::new();
        for file in &self.files {
            let base = base_name(file);
            if base.is_empty() {
                return Err(invalid(format!("empty template name in '{}'", location.display())));
            }
            if !seen.insert(base) {
                return Err(invalid(format!(
                    "two templates write '{base}' in '{}'",
                    location.display()
                )));
            }
        }

        for child in &self.children {
            if !is_plain_component(&child.name) {
                return Err(invalid(format!(
                    "directory name '{}' in '{}' is not a single path component",
                    child.name,
                    location.display()
                )));
            }
            if !seen.insert(child.name.as_str()) {
                return Err(invalid(format!(
                    "'{}' appears more than once in '{}'",
                    child.name,
                    location.display()
                )));
            }
            child.validate_at(&location)?;
        }

        Ok(())
    }

    /// Check that no dependency link would take the name of a child
    /// directory of the same node.
    ///
    /// Links are named after the dependency's base name, so a dependency
    /// called like a child would be linked first and then moved aside as a
    /// backup when the child directory is created.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidLayout`] for the first such clash, or a
    /// lookup or metadata decode error from the loader.
    pub fn validate_links(&self, loader: &mut TemplateLoader) -> Result<()> {
        self.validate_links_at(Path::new(""), loader)
    }

    fn validate_links_at(&self, parent: &Path, loader: &mut TemplateLoader) -> Result<()> {
        let location = parent.join(&self.name);
        let depends = self.dependencies(loader)?;

        for dependency in depends.iter() {
            let Some(link_name) = Path::new(dependency).file_name() else {
                continue;
            };
            if self.children.iter().any(|child| link_name == child.name.as_str()) {
                return Err(ScaffoldError::InvalidLayout {
                    reason: format!(
                        "dependency '{dependency}' in '{}' has the same name as a subdirectory",
                        location.display()
                    ),
                });
            }
        }

        for child in &self.children {
            child.validate_links_at(&location, loader)?;
        }
        Ok(())
    }

    /// Dependencies declared by this node's own files, without rendering.
    ///
    /// # Errors
    ///
    /// Returns a lookup or metadata decode error from the loader.
    pub fn dependencies(&self, loader: &mut TemplateLoader) -> Result<DependencySet> {
        let mut depends = DependencySet::new();
        for file in &self.files {
            let extracted = loader.load(file)?;
            depends.extend(extracted.metadata.depends());
        }
        Ok(depends)
    }

    /// Render this node and all of its descendants into `target`.
    ///
    /// `target` must already exist. For the root it is the project directory;
    /// child nodes are rendered into `target/<child name>`, which is created
    /// here after backing up whatever was there.
    ///
    /// # Errors
    ///
    /// Returns the first lookup, decode, render or filesystem error. Files and
    /// directories written before the failure are left in place.
    pub fn render(&self, target: &Path, ctx: &mut RenderContext<'_>) -> Result<()> {
        tracing::info!("Rendering {} into {}", self.label(), target.display());

        let depends = self.render_files(target, ctx)?;

        for dependency in depends.iter() {
            if ensure_link(target, dependency)? {
                ctx.summary.links += 1;
            }
        }

        for child in &self.children {
            let child_dir = target.join(&child.name);
            create_fresh_dir(&child_dir)?;
            ctx.summary.directories += 1;
            child.render(&child_dir, ctx)?;
        }

        Ok(())
    }

    fn render_files(&self, target: &Path, ctx: &mut RenderContext<'_>) -> Result<DependencySet> {
        let mut depends = DependencySet::new();
        for file in &self.files {
            let template = Template::load(ctx.loader, file, &ctx.routes)?;
            depends.extend(template.metadata().depends());
            template.render_into(ctx.renderer, target)?;
            ctx.summary.files += 1;
        }
        Ok(depends)
    }

    fn label(&self) -> &str {
        if self.is_root() { "project root" } else { &self.name }
    }
}

fn base_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

fn is_plain_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
}
