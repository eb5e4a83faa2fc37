//! Template fixtures.

use chrono::{Local, TimeZone};
use std::fs;
use std::io;
use std::path::Path;

use crate::constants::{META_BEGIN, META_END};
use crate::templating::{MemoryStore, TemplateRenderer};

/// A template source assembled from a body and optional `depends`.
#[derive(Debug, Clone)]
pub struct TemplateFixture {
    pub name: String,
    pub body: String,
    pub depends: Vec<String>,
}

impl TemplateFixture {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            depends: Vec::new(),
        }
    }

    #[must_use]
    pub fn depends(mut self, depends: &[&str]) -> Self {
        self.depends = depends.iter().map(|d| (*d).to_string()).collect();
        self
    }

    /// Full source text: a docstring with the metadata block (when there are
    /// dependencies) followed by the body.
    pub fn source(&self) -> String {
        if self.depends.is_empty() {
            return self.body.clone();
        }

        let list: String = self.depends.iter().map(|d| format!("\n  - {d}")).collect();
        format!("\"\"\"{{{{header}}}}\n\n{META_BEGIN}depends:{list}{META_END}\"\"\"\n{}", self.body)
    }
}

/// In-memory store holding every fixture.
pub fn memory_store(fixtures: &[TemplateFixture]) -> MemoryStore {
    fixtures.iter().fold(MemoryStore::new(), |store, f| store.with(f.name.clone(), f.source()))
}

/// Write fixtures as files under `root`, for a [`DirStore`](crate::templating::DirStore).
///
/// # Errors
///
/// Returns the first I/O error.
pub fn write_template_dir(root: &Path, fixtures: &[TemplateFixture]) -> io::Result<()> {
    for fixture in fixtures {
        let path = root.join(&fixture.name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, fixture.source())?;
    }
    Ok(())
}

/// Renderer pinned to 2016-03-14 15:09:26 local time.
pub fn fixed_renderer() -> TemplateRenderer {
    let created = Local
        .with_ymd_and_hms(2016, 3, 14, 15, 9, 26)
        .single()
        .unwrap_or_else(Local::now);
    TemplateRenderer::with_timestamp(created)
}
