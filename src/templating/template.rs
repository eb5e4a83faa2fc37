//! A single loaded template.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::loader::TemplateLoader;
use super::renderer::TemplateRenderer;
use crate::core::Result;
use crate::metadata::{Extracted, TemplateMetadata};
use crate::output::{WriterKind, WriterRoutes};

/// One named template with its extracted metadata and chosen writer.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    extracted: Rc<Extracted>,
    writer: WriterKind,
}

impl Template {
    /// Load `name` through `loader` and pick its writer from `routes`.
    ///
    /// # Errors
    ///
    /// Returns the loader's lookup or metadata decode error.
    pub fn load(loader: &mut TemplateLoader, name: &str, routes: &WriterRoutes) -> Result<Self> {
        let extracted = loader.load(name)?;
        Ok(Self {
            name: name.to_string(),
            extracted,
            writer: routes.for_file(base_name(name)),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn metadata(&self) -> &TemplateMetadata {
        &self.extracted.metadata
    }

    /// Source text with the metadata block removed.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.extracted.body
    }

    /// File name the output is written under: `tica/cluster/cluster.py`
    /// becomes `cluster.py`.
    #[must_use]
    pub fn output_name(&self) -> &str {
        base_name(&self.name)
    }

    #[must_use]
    pub const fn writer(&self) -> WriterKind {
        self.writer
    }

    /// Render the body with the renderer's context.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Render`](crate::core::ScaffoldError::Render)
    /// if the template engine fails.
    pub fn render(&self, renderer: &TemplateRenderer) -> Result<String> {
        renderer.render(&self.name, self.body())
    }

    /// Render and write the output into `dir`, returning the written path.
    ///
    /// # Errors
    ///
    /// Returns a render error, or a filesystem error from the writer.
    pub fn render_into(&self, renderer: &TemplateRenderer, dir: &Path) -> Result<PathBuf> {
        let rendered = self.render(renderer)?;
        let path = self.writer.write(dir, self.output_name(), &rendered)?;
        tracing::debug!("Rendered {} -> {}", self.name, path.display());
        Ok(path)
    }
}

fn base_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}
