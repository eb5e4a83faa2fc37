//! Extraction cache for template sources during one generation run.
//!
//! The bundled layout renders the same template more than once (the tICA
//! subtree appears under every featurization). Each distinct template name
//! is extracted once per run; later lookups reuse the cached result.

use std::collections::HashMap;
use std::rc::Rc;

use crate::metadata::Extracted;

/// Cache of extracted template sources, keyed by template name.
///
/// Lives for a single run and is never persisted, so edits to templates on
/// disk are always picked up by the next run.
#[derive(Debug, Default)]
pub(crate) struct ExtractionCache {
    entries: HashMap<String, Rc<Extracted>>,
    hits: usize,
    misses: usize,
}

impl ExtractionCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Get a cached extraction if available
    pub(crate) fn get(&mut self, name: &str) -> Option<Rc<Extracted>> {
        if let Some(entry) = self.entries.get(name) {
            self.hits += 1;
            Some(Rc::clone(entry))
        } else {
            self.misses += 1;
            None
        }
    }

    pub(crate) fn insert(&mut self, name: String, extracted: Rc<Extracted>) {
        self.entries.insert(name, extracted);
    }

    /// (hits, misses)
    pub(crate) const fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
