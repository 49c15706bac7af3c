//! Inline styling for text components
//!
//! A style is an ordered list of CSS property/value pairs. Styled renders
//! go through the host's markup primitive as a `<span>` with an inline
//! `style` attribute.

/// Ordered CSS-like property map
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    properties: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property; insertion order is emission order
    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((property.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Inline CSS string: `color: red; font-size: 20px`
    pub fn to_inline(&self) -> String {
        self.properties
            .iter()
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Styled inline snippet around `content`
    pub fn wrap_span(&self, content: &str) -> String {
        format!("<span style=\"{}\">{}</span>", self.to_inline(), content)
    }
}
