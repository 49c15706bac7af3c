//! Text component with case-transformation helpers

use crate::host::Host;

use super::style::Style;
use super::{auto_key, Component, ComponentError};

/// A plain text leaf
pub struct Text {
    content: String,
    key: String,
}

impl Text {
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

    /// Render through the plain-text primitive
    pub fn render(&self, host: &mut dyn Host) -> Result<(), ComponentError> {
        Ok(host.text(&self.content)?)
    }

    /// Render a styled inline snippet through the markup primitive
    pub fn render_styled(&self, host: &mut dyn Host, style: &Style) -> Result<(), ComponentError> {
        Ok(host.markup(&style.wrap_span(&self.content), true)?)
    }

    /// Uppercase copy of the content
    pub fn upper(&self) -> String {
        self.content.to_uppercase()
    }

    /// Lowercase copy of the content
    pub fn lower(&self) -> String {
        self.content.to_lowercase()
    }

    /// First character uppercased, the rest lowercased
    pub fn capitalize(&self) -> String {
        capitalize_str(&self.content)
    }

    /// Each whitespace-separated word capitalized, single-space joined
    pub fn allcaps(&self) -> String {
        title_case(&self.content)
    }
}

impl Component for Text {
    fn render(&self, host: &mut dyn Host) -> Result<(), ComponentError> {
        Text::render(self, host)
    }
}

/// Capitalize one string: first character upper, tail lower
pub(crate) fn capitalize_str(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Capitalize each whitespace-separated word, join with single spaces
pub(crate) fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize_str)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{PrimitiveCall, RecordingHost};

    #[test]
    fn test_transformations() {
        let text = Text::new("test HEADER");
        assert_eq!(text.upper(), "TEST HEADER");
        assert_eq!(text.lower(), "test header");
        assert_eq!(text.capitalize(), "Test header");
        assert_eq!(text.allcaps(), "Test Header");
    }

    #[test]
    fn test_allcaps_collapses_whitespace() {
        let text = Text::new("  spaced   out words ");
        assert_eq!(text.allcaps(), "Spaced Out Words");
    }

    #[test]
    fn test_render_plain() {
        let mut host = RecordingHost::new();
        Text::new("hello").render(&mut host).unwrap();
        assert_eq!(host.calls(), &[PrimitiveCall::Text("hello".to_string())]);
    }

    #[test]
    fn test_render_styled_uses_markup() {
        let mut host = RecordingHost::new();
        let style = Style::new().set("color", "red").set("font-size", "20px");
        Text::new("Styled Text")
            .render_styled(&mut host, &style)
            .unwrap();
        assert_eq!(
            host.calls(),
            &[PrimitiveCall::Markup {
                markup: "<span style=\"color: red; font-size: 20px\">Styled Text</span>"
                    .to_string(),
                allow_unsafe_html: true,
            }]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        // Two instances with the same content produce the same call; one
        // instance rendered twice produces two identical calls.
        let mut host = RecordingHost::new();
        Text::new("x").render(&mut host).unwrap();
        Text::new("x").render(&mut host).unwrap();
        let same = Text::new("x");
        same.render(&mut host).unwrap();
        same.render(&mut host).unwrap();
        assert_eq!(host.calls().len(), 4);
        assert!(host
            .calls()
            .iter()
            .all(|call| *call == PrimitiveCall::Text("x".to_string())));
    }

    #[test]
    fn test_keys_default_unique() {
        let a = Text::new("a");
        let b = Text::new("b");
        assert_ne!(a.key(), b.key());
        assert_eq!(Text::new("c").with_key("hero").key(), "hero");
    }
}
