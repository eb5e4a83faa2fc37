//! Project layouts: trees of template directories.
//!
//! - [`dir`] - the [`TemplateDir`] node and its render traversal
//! - [`project`] - the bundled MSM analysis project
//! - [`context`] - state shared across one render run

pub mod context;
pub mod dir;
pub mod project;

pub use context::{RenderContext, RenderSummary};
pub use dir::{DependencySet, TemplateDir};
pub use project::{project_layout, tica_msm};
