//! Header component with level selection and case helpers

use crate::host::{HeadingLevel, Host};

use super::style::Style;
use super::text::{capitalize_str, title_case};
use super::{auto_key, Component, ComponentError};

/// A heading leaf rendered at levels 1-6
pub struct Header {
    content: String,
    key: String,
}

impl Header {
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

    /// Render through the heading primitive at the given level
    pub fn render(&self, host: &mut dyn Host, level: HeadingLevel) -> Result<(), ComponentError> {
        Ok(host.heading(&self.content, level)?)
    }

    /// Render a styled inline snippet through the markup primitive
    pub fn render_styled(&self, host: &mut dyn Host, style: &Style) -> Result<(), ComponentError> {
        Ok(host.markup(&style.wrap_span(&self.content), true)?)
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

impl Component for Header {
    fn render(&self, host: &mut dyn Host) -> Result<(), ComponentError> {
        Header::render(self, host, HeadingLevel::H1)
    }
}
