//! JSON display component
//!
//! Content is normalized to a JSON value at construction time; malformed
//! text input becomes the `{"error": "Invalid JSON"}` sentinel instead of
//! failing. Render serializes back to indented text in a code block.

use serde_json::{json, Value};

use crate::host::Host;

use super::{auto_key, Component, ComponentError};

/// A code-block view over a JSON value
pub struct JsonDisplay {
    content: Value,
    key: String,
    expanded: bool,
    language: String,
}

impl JsonDisplay {
    /// Display an already-parsed value
    pub fn from_value(value: Value) -> Self {
        Self {
            content: value,
            key: auto_key(),
            expanded: false,
            language: "json".to_string(),
        }
    }

    /// Parse text input, substituting the error sentinel on failure
    pub fn parse(text: &str) -> Self {
        let content = serde_json::from_str(text).unwrap_or_else(|err| {
            crate::log!("JsonDisplay::parse - invalid JSON: {}", err);
            json!({"error": "Invalid JSON"})
        });
        Self::from_value(content)
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Syntax-highlighting language for the code block
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Serialize with two-space indentation into the code-block primitive
    pub fn render(&self, host: &mut dyn Host) -> Result<(), ComponentError> {
        let pretty = serde_json::to_string_pretty(&self.content)?;
        Ok(host.code_block(&pretty, &self.language)?)
    }
}

impl Component for JsonDisplay {
    fn render(&self, host: &mut dyn Host) -> Result<(), ComponentError> {
        JsonDisplay::render(self, host)
    }
}
