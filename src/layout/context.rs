//! Per-run rendering context.

use crate::output::WriterRoutes;
use crate::templating::{TemplateLoader, TemplateRenderer};

/// Parameters shared by every directory rendered in one run.
///
/// # Fields
///
/// * `loader` - Template source lookup and metadata cache
/// * `renderer` - Tera renderer carrying the run's timestamp
/// * `routes` - Writer chosen for each output file kind
/// * `summary` - Counters updated as the run progresses
pub struct RenderContext<'a> {
    pub loader: &'a mut TemplateLoader,
    pub renderer: &'a TemplateRenderer,
    pub routes: WriterRoutes,
    pub summary: RenderSummary,
}

impl<'a> RenderContext<'a> {
    pub fn new(loader: &'a mut TemplateLoader, renderer: &'a TemplateRenderer) -> Self {
        Self {
            loader,
            renderer,
            routes: WriterRoutes::default(),
            summary: RenderSummary::default(),
        }
    }

    /// Write Python templates as notebooks.
    #[must_use]
    pub fn notebook(mut self, value: bool) -> Self {
        self.routes = WriterRoutes::new(value);
        self
    }
}

/// What a render run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Output files written
    pub files: usize,
    /// Dependency links created
    pub links: usize,
    /// Subdirectories created
    pub directories: usize,
}
