//! Template rendering engine with Tera.
//!
//! This module provides the [`TemplateRenderer`] struct that wraps Tera with
//! the context every project template receives: a generated `header` comment
//! and the generation timestamp under `date`.

use chrono::{DateTime, Local};
use tera::{Context as TeraContext, Tera};

use crate::constants::{HEADER_ATTRIBUTION, HEADER_TITLE};
use crate::core::{Result, ScaffoldError};

/// Renders template bodies with the per-run context.
///
/// The timestamp is fixed when the renderer is created so every file of one
/// run carries the same `created` line.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    created: DateTime<Local>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Renderer stamped with the current local time.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timestamp(Local::now())
    }

    #[must_use]
    pub const fn with_timestamp(created: DateTime<Local>) -> Self {
        Self {
            created,
        }
    }

    /// Generation timestamp in ISO-8601 form without a UTC offset.
    #[must_use]
    pub fn timestamp(&self) -> String {
        self.created.naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }

    /// Header comment inserted at the top of generated files.
    #[must_use]
    pub fn header(&self) -> String {
        [HEADER_TITLE.to_string(), format!("created {}", self.timestamp()), HEADER_ATTRIBUTION.to_string()]
            .join("\n")
    }

    /// The Tera context handed to every template.
    #[must_use]
    pub fn context(&self) -> TeraContext {
        let mut context = TeraContext::new();
        context.insert("header", &self.header());
        context.insert("date", &self.timestamp());
        context
    }

    /// Render a template body.
    ///
    /// # Arguments
    ///
    /// * `name` - Template name, used in error messages
    /// * `body` - Template text with its metadata block already removed
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Render`] if the body has a syntax error or
    /// references a variable missing from the context.
    pub fn render(&self, name: &str, body: &str) -> Result<String> {
        tracing::debug!("Rendering template '{}'", name);

        // A fresh instance per render keeps one-off templates from piling up.
        let mut tera = Tera::default();
        tera.render_str(body, &self.context()).map_err(|e| ScaffoldError::Render {
            template: name.to_string(),
            reason: format_tera_error(&e),
        })
    }
}

/// Flatten a Tera error chain into one message without internal template names.
pub(crate) fn format_tera_error(error: &tera::Error) -> String {
    use std::error::Error;

    let mut messages = Vec::new();
    let mut current: Option<&dyn Error> = Some(error as &dyn Error);
    while let Some(err) = current {
        let cleaned = err
            .to_string()
            .replace("while rendering '__tera_one_off'", "")
            .replace("Failed to render '__tera_one_off'", "")
            .replace("Failed to parse '__tera_one_off'", "")
            .replace("'__tera_one_off'", "template")
            .trim()
            .to_string();

        if !cleaned.is_empty() {
            messages.push(cleaned);
        }
        current = err.source();
    }

    if messages.is_empty() {
        "template syntax error".to_string()
    } else {
        messages.join(": ")
    }
}
