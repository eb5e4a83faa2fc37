//! Conversion of rendered Python scripts into Jupyter notebooks.
//!
//! Scripts are divided into sections by level-2 markdown heading lines of
//! the form `## Title`. Each section becomes a markdown
//! cell holding the heading and a code cell holding the section body.
//! Documents are nbformat v4 JSON.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{KERNEL_DISPLAY_NAME, KERNEL_NAME, NBFORMAT, NBFORMAT_MINOR};

// Level-2 heading at the start of a line.
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").expect("heading pattern is valid"));

/// A notebook document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub metadata: NotebookMetadata,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

/// Document-level notebook metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookMetadata {
    pub kernelspec: KernelSpec,
}

/// Kernel identity required for the notebook to open as runnable Python 3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelSpec {
    pub name: String,
    pub display_name: String,
}

impl Default for KernelSpec {
    fn default() -> Self {
        Self {
            name: KERNEL_NAME.to_string(),
            display_name: KERNEL_DISPLAY_NAME.to_string(),
        }
    }
}

/// One notebook cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    Markdown {
        metadata: Map<String, Value>,
        source: String,
    },
    Code {
        execution_count: Option<u32>,
        metadata: Map<String, Value>,
        outputs: Vec<Value>,
        source: String,
    },
}

impl Cell {
    pub fn markdown(source: impl Into<String>) -> Self {
        Self::Markdown {
            metadata: Map::new(),
            source: source.into(),
        }
    }

    pub fn code(source: impl Into<String>) -> Self {
        Self::Code {
            execution_count: None,
            metadata: Map::new(),
            outputs: Vec::new(),
            source: source.into(),
        }
    }

    /// Cell text.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Markdown {
                source,
                ..
            }
            | Self::Code {
                source,
                ..
            } => source,
        }
    }
}

impl Notebook {
    /// Build a notebook from a rendered script.
    ///
    /// `script_name` is the original `.py` file name; it titles any text that
    /// precedes the first heading.
    #[must_use]
    pub fn from_script(script_name: &str, rendered: &str) -> Self {
        let cells = split_cells(script_name, rendered)
            .into_iter()
            .flat_map(|(heading, body)| [Cell::markdown(format!("## {heading}")), Cell::code(body)])
            .collect();

        Self {
            cells,
            metadata: NotebookMetadata {
                kernelspec: KernelSpec::default(),
            },
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    /// Serialize to the on-disk JSON form.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; the document types cannot produce one in
    /// practice.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Split rendered text into `(heading, body)` pairs in source order.
///
/// Headings are lines matching `^## (.*)$`; the heading text is trimmed and
/// each body (trimmed) runs to the next heading or the end of the text. Text
/// before the first heading becomes a leading pair titled `script_name`,
/// which is dropped when that text is blank. Text without any heading is a
/// single pair titled `script_name`.
#[must_use]
pub fn split_cells(script_name: &str, rendered: &str) -> Vec<(String, String)> {
    let headings: Vec<_> = HEADING.captures_iter(rendered).collect();
    let mut pairs = Vec::with_capacity(headings.len() + 1);

    let leading_end = headings.first().and_then(|caps| caps.get(0)).map_or(rendered.len(), |m| m.start());
    let leading = rendered[..leading_end].trim();
    if headings.is_empty() || !leading.is_empty() {
        pairs.push((script_name.to_string(), leading.to_string()));
    }

    for (index, caps) in headings.iter().enumerate() {
        let (Some(whole), Some(title)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let body_end = headings
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map_or(rendered.len(), |m| m.start());
        let body = rendered[whole.end()..body_end].trim();
        pairs.push((title.as_str().trim().to_string(), body.to_string()));
    }

    pairs
}

/// Notebook file name for a script: `cluster.py` becomes `cluster.ipynb`.
#[must_use]
pub fn notebook_file_name(script_name: &str) -> String {
    Path::new(script_name).with_extension("ipynb").to_string_lossy().into_owned()
}
