//! Metadata embedded in template sources.
//!
//! Templates declare which files from ancestor directories they need through
//! a YAML block (see [`extractor`]). The decoded block is a [`TemplateMetadata`].

pub mod extractor;

pub use extractor::{Extracted, MetadataExtractor};

use serde_yaml::{Mapping, Value};

/// Decoded metadata of one template.
///
/// Holds the full key/value mapping in source order plus the validated
/// `depends` list. An absent block decodes to the empty value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateMetadata {
    values: Mapping,
    depends: Vec<String>,
}

impl TemplateMetadata {
    pub(crate) fn new(values: Mapping, depends: Vec<String>) -> Self {
        Self {
            values,
            depends,
        }
    }

    /// Dependency names declared under `depends`, in declared order.
    #[must_use]
    pub fn depends(&self) -> &[String] {
        &self.depends
    }

    /// Look up a raw metadata value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
