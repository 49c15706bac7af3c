//! Title component with a subheader variant

use crate::host::Host;

use super::style::Style;
use super::text::{capitalize_str, title_case};
use super::{auto_key, Component, ComponentError};

/// A page title leaf
pub struct Title {
    content: String,
    key: String,
}

impl Title {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            key: auto_key(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Render through the title primitive
    pub fn render(&self, host: &mut dyn Host) -> Result<(), ComponentError> {
        Ok(host.title(&self.content)?)
    }

    /// Render a styled inline snippet through the markup primitive
    pub fn render_styled(&self, host: &mut dyn Host, style: &Style) -> Result<(), ComponentError> {
        Ok(host.markup(&style.wrap_span(&self.content), true)?)
    }

    /// Render through the subheader primitive
    pub fn subheader(&self, host: &mut dyn Host) -> Result<(), ComponentError> {
        Ok(host.subheader(&self.content)?)
    }

    pub fn upper(&self) -> String {
        self.content.to_uppercase()
    }

    pub fn lower(&self) -> String {
        self.content.to_lowercase()
    }

    pub fn capitalize(&self) -> String {
        capitalize_str(&self.content)
    }

    pub fn allcaps(&self) -> String {
        title_case(&self.content)
    }
}

impl Component for Title {
    fn render(&self, host: &mut dyn Host) -> Result<(), ComponentError> {
        Title::render(self, host)
    }
}
