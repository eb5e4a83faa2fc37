//! Project generation entry point.
//!
//! [`Generator`] bundles a layout, a template loader and a renderer, and
//! renders the whole tree into a target directory in one call:
//!
//! ```rust,no_run
//! use msm_scaffold::generator::Generator;
//! use msm_scaffold::templating::EmbeddedStore;
//! use std::path::Path;
//!
//! # fn example() -> msm_scaffold::core::Result<()> {
//! let summary = Generator::new(EmbeddedStore).notebook(true).generate(Path::new("my-project"))?;
//! println!("{} files written", summary.files);
//! # Ok(())
//! # }
//! ```

use std::io;
use std::path::Path;

use crate::core::{Result, ScaffoldError};
use crate::layout::{RenderContext, RenderSummary, TemplateDir, project_layout};
use crate::templating::{TemplateLoader, TemplateRenderer, TemplateStore};

/// Renders a layout of templates into a project directory.
pub struct Generator {
    layout: TemplateDir,
    loader: TemplateLoader,
    renderer: TemplateRenderer,
    notebook: bool,
}

impl Generator {
    /// Generator for the bundled project layout, reading templates from
    /// `store`.
    pub fn new(store: impl TemplateStore + 'static) -> Self {
        Self::with_loader(TemplateLoader::new(store))
    }

    pub fn with_loader(loader: TemplateLoader) -> Self {
        Self {
            layout: project_layout(),
            loader,
            renderer: TemplateRenderer::new(),
            notebook: false,
        }
    }

    /// Replace the layout to render.
    #[must_use]
    pub fn layout(mut self, layout: TemplateDir) -> Self {
        self.layout = layout;
        self
    }

    /// Replace the renderer, e.g. to pin the header timestamp.
    #[must_use]
    pub fn renderer(mut self, renderer: TemplateRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Write Python templates as notebooks.
    #[must_use]
    pub const fn notebook(mut self, value: bool) -> Self {
        self.notebook = value;
        self
    }

    /// Validate the layout and render it into `target`, which must be an
    /// existing directory.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidLayout`] before anything is written if
    /// the layout has clashing names (including dependency links named like
    /// subdirectories), [`ScaffoldError::FileSystem`] if
    /// `target` is not a directory, and otherwise the first error hit while
    /// rendering.
    pub fn generate(&mut self, target: &Path) -> Result<RenderSummary> {
        self.layout.validate()?;
        self.layout.validate_links(&mut self.loader)?;

        if !target.is_dir() {
            return Err(ScaffoldError::fs(
                "render into",
                target,
                io::Error::new(io::ErrorKind::NotFound, "not a directory"),
            ));
        }

        tracing::info!("Generating project from {} into {}", self.loader.describe(), target.display());

        let mut ctx = RenderContext::new(&mut self.loader, &self.renderer).notebook(self.notebook);
        self.layout.render(target, &mut ctx)?;
        let summary = ctx.summary;

        self.loader.log_stats();
        Ok(summary)
    }
}
