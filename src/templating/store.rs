//! Backing stores for template sources.
//!
//! A store maps a relative template name such as `tica/cluster/cluster.py`
//! to its raw text. Looking up an unknown name is a
//! [`ScaffoldError::TemplateNotFound`].

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::core::{Result, ScaffoldError};

/// Read-only collection of named template sources.
pub trait TemplateStore {
    /// Raw source of the template called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::TemplateNotFound`] if the store has no such
    /// template, or another error if the source exists but cannot be read.
    fn source(&self, name: &str) -> Result<Cow<'_, str>>;

    /// Short description of where templates come from, for log messages.
    fn describe(&self) -> String;
}

macro_rules! bundled {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $name)))),*]
    };
}

/// Templates compiled into the binary.
static BUNDLED: &[(&str, &str)] = bundled![
    "0-test-install.py",
    "1-get-example-data.py",
    "README.md",
    "analysis/gather-metadata.py",
    "analysis/gather-metadata-plot.py",
    "analysis/rmsd/rmsd.py",
    "analysis/rmsd/rmsd-plot.py",
    "analysis/landmarks/featurize.py",
    "analysis/landmarks/featurize-plot.py",
    "analysis/dihedrals/featurize.py",
    "analysis/dihedrals/featurize-plot.py",
    "tica/tica.py",
    "tica/tica-plot.py",
    "tica/tica-sample-coordinate.py",
    "tica/tica-sample-coordinate-plot.py",
    "tica/cluster/cluster.py",
    "tica/cluster/cluster-plot.py",
    "tica/cluster/msm/msm-1-timescales.py",
    "tica/cluster/msm/msm-1-timescales-plot.py",
    "tica/cluster/msm/msm-2-microstate.py",
    "tica/cluster/msm/msm-2-microstate-plot.py",
];

/// Store backed by the templates bundled with the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedStore;

impl EmbeddedStore {
    /// Names of every bundled template.
    pub fn names() -> impl Iterator<Item = &'static str> {
        BUNDLED.iter().map(|(name, _)| *name)
    }
}

impl TemplateStore for EmbeddedStore {
    fn source(&self, name: &str) -> Result<Cow<'_, str>> {
        BUNDLED
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, source)| Cow::Borrowed(*source))
            .ok_or_else(|| ScaffoldError::TemplateNotFound {
                name: name.to_string(),
            })
    }

    fn describe(&self) -> String {
        "bundled templates".to_string()
    }
}

/// Store reading templates from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateStore for DirStore {
    fn source(&self, name: &str) -> Result<Cow<'_, str>> {
        let relative = Path::new(name);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(ScaffoldError::TemplateNotFound {
                name: name.to_string(),
            });
        }

        let path = self.root.join(relative);
        match fs::read_to_string(&path) {
            Ok(source) => Ok(Cow::Owned(source)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ScaffoldError::TemplateNotFound {
                name: name.to_string(),
            }),
            Err(e) => Err(ScaffoldError::fs("read template", &path, e)),
        }
    }

    fn describe(&self) -> String {
        format!("template directory {}", self.root.display())
    }
}

/// In-memory store, for tests and programmatic use.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sources: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.insert(name, source);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.sources.insert(name.into(), source.into());
    }
}

impl TemplateStore for MemoryStore {
    fn source(&self, name: &str) -> Result<Cow<'_, str>> {
        self.sources.get(name).map(|s| Cow::Borrowed(s.as_str())).ok_or_else(|| {
            ScaffoldError::TemplateNotFound {
                name: name.to_string(),
            }
        })
    }

    fn describe(&self) -> String {
        format!("in-memory store ({} templates)", self.sources.len())
    }
}
