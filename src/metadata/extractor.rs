//! Extract embedded metadata blocks from template sources.
//!
//! A template may carry a YAML block between [`META_BEGIN`] and [`META_END`],
//! usually inside the module docstring of a generated script:
//!
//! ```text
//! """Cluster tICA coordinates
//!
//! Meta
//! ----
//! depends:
//!   - ttrajs
//!   - meta.pandas.pickl
//! ----
//! """
//! ```
//!
//! Extraction splits the source into the body handed to the render engine
//! (block and markers removed) and the decoded [`TemplateMetadata`].

use serde_yaml::Value;

use super::TemplateMetadata;
use crate::constants::{DEPENDS_KEY, META_BEGIN, META_END};
use crate::core::{Result, ScaffoldError};

/// A template source split into its renderable body and its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Extracted {
    /// Source text with the metadata block (markers included) removed
    pub body: String,
    /// Decoded metadata; empty when the source has no block
    pub metadata: TemplateMetadata,
}

/// Metadata extractor for template sources.
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Split `source` into body and metadata.
    ///
    /// # Arguments
    /// * `name` - Template name, used in error messages
    /// * `source` - Raw template text
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::MetadataDecode`] if the block is unterminated,
    /// is not valid YAML, is not a mapping, or has a `depends` value that is
    /// not a list of strings. A missing block is not an error.
    pub fn extract(name: &str, source: &str) -> Result<Extracted> {
        let Some(begin) = source.find(META_BEGIN) else {
            return Ok(Extracted {
                body: source.to_string(),
                metadata: TemplateMetadata::default(),
            });
        };

        let block_start = begin + META_BEGIN.len();

        // The begin marker already ate the newline the end marker leads with,
        // so an empty block is a closing line directly after the opening one.
        let closing_line = &META_END[1..];
        let (block_end, rest) = if source[block_start..].starts_with(closing_line) {
            (block_start, block_start + closing_line.len())
        } else {
            let block_len = source[block_start..].find(META_END).ok_or_else(|| {
                ScaffoldError::MetadataDecode {
                    template: name.to_string(),
                    reason: "metadata block has no closing '----' line".to_string(),
                }
            })?;
            let block_end = block_start + block_len;
            (block_end, block_end + META_END.len())
        };

        let metadata = Self::decode(name, &source[block_start..block_end])?;

        let mut body = String::with_capacity(source.len());
        body.push_str(&source[..begin]);
        body.push_str(&source[rest..]);

        tracing::debug!(
            "Extracted metadata from '{}' ({} key(s), {} dependency(ies))",
            name,
            metadata.len(),
            metadata.depends().len()
        );

        Ok(Extracted {
            body,
            metadata,
        })
    }

    /// Decode the YAML text found between the markers.
    fn decode(name: &str, block: &str) -> Result<TemplateMetadata> {
        let decode_error = |reason: String| ScaffoldError::MetadataDecode {
            template: name.to_string(),
            reason,
        };

        if block.trim().is_empty() {
            return Ok(TemplateMetadata::default());
        }

        let value: Value = serde_yaml::from_str(block).map_err(|e| decode_error(e.to_string()))?;

        let values = match value {
            Value::Null => return Ok(TemplateMetadata::default()),
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(decode_error(format!(
                    "expected a mapping, found {}",
                    describe(&other)
                )));
            }
        };

        let depends = match values.get(DEPENDS_KEY) {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => serde_yaml::from_value::<Vec<String>>(value.clone()).map_err(|e| {
                decode_error(format!("'{DEPENDS_KEY}' must be a list of file names: {e}"))
            })?,
        };

        Ok(TemplateMetadata::new(values, depends))
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
