//! Template loading with metadata extraction.
//!
//! [`TemplateLoader`] sits between a [`TemplateStore`] and the renderer:
//! sources are fetched by name, split into body and metadata by
//! [`MetadataExtractor`], and cached for the rest of the run.

use std::rc::Rc;

use super::cache::ExtractionCache;
use super::store::TemplateStore;
use crate::core::Result;
use crate::metadata::{Extracted, MetadataExtractor};

/// Loads templates from a store and extracts their metadata once per name.
pub struct TemplateLoader {
    store: Box<dyn TemplateStore>,
    cache: ExtractionCache,
}

impl TemplateLoader {
    pub fn new(store: impl TemplateStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            cache: ExtractionCache::new(),
        }
    }

    /// Body and metadata of the template called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::TemplateNotFound`](crate::core::ScaffoldError::TemplateNotFound)
    /// if the store has no such template, or
    /// [`ScaffoldError::MetadataDecode`](crate::core::ScaffoldError::MetadataDecode)
    /// if its metadata block is malformed.
    pub fn load(&mut self, name: &str) -> Result<Rc<Extracted>> {
        if let Some(extracted) = self.cache.get(name) {
            return Ok(extracted);
        }

        let source = self.store.source(name)?;
        let extracted = Rc::new(MetadataExtractor::extract(name, &source)?);
        self.cache.insert(name.to_string(), Rc::clone(&extracted));
        Ok(extracted)
    }

    /// Description of the underlying store.
    #[must_use]
    pub fn describe(&self) -> String {
        self.store.describe()
    }

    /// Log cache statistics at debug level.
    pub fn log_stats(&self) {
        let (hits, misses) = self.cache.stats();
        tracing::debug!(
            "Template cache: {} distinct template(s), {} hit(s), {} miss(es)",
            self.cache.len(),
            hits,
            misses
        );
    }
}
