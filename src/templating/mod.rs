//! Template loading and rendering.
//!
//! Rendering is a two-stage pipeline. A [`TemplateLoader`] fetches the raw
//! source from a [`TemplateStore`] and splits it into body and metadata with
//! [`MetadataExtractor`](crate::metadata::MetadataExtractor); the
//! [`TemplateRenderer`] then applies Tera to the body only. A [`Template`]
//! ties both stages to the writer chosen for its output file.
//!
//! # Template Context
//!
//! Every template is rendered with two variables:
//! - `header`: the generated header comment (tool version, creation time,
//!   citation notice)
//! - `date`: the creation timestamp on its own
//!
//! Referencing any other variable is a render error.
//!
//! # Examples
//!
//! ```rust,no_run
//! use msm_scaffold::output::WriterRoutes;
//! use msm_scaffold::templating::{EmbeddedStore, Template, TemplateLoader, TemplateRenderer};
//!
//! # fn example() -> msm_scaffold::core::Result<()> {
//! let mut loader = TemplateLoader::new(EmbeddedStore);
//! let template = Template::load(&mut loader, "tica/tica.py", &WriterRoutes::default())?;
//! println!("{:?}", template.metadata().depends());
//!
//! let text = template.render(&TemplateRenderer::new())?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

pub(crate) mod cache;
pub mod loader;
pub mod renderer;
pub mod store;
pub mod template;

pub use loader::TemplateLoader;
pub use renderer::TemplateRenderer;
pub use store::{DirStore, EmbeddedStore, MemoryStore, TemplateStore};
pub use template::Template;
