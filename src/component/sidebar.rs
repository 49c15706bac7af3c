//! Sidebar navigation component
//!
//! Entries are append-only (title, optional action) pairs. Render emits
//! one button per entry inside the sidebar region; an activated entry's
//! action runs synchronously before iteration continues.

use crate::host::{scoped, ButtonRequest, Host, Region};

use super::{Action, Component, ComponentError};

/// One sidebar entry
pub struct SidebarEntry {
    title: String,
    action: Option<Action>,
}

impl SidebarEntry {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }
}

/// Sidebar navigation with clickable sections
pub struct Sidebar {
    key: String,
    entries: Vec<SidebarEntry>,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new()
    }
}

impl Sidebar {
    pub fn new() -> Self {
        Self {
            key: "sidebar".to_string(),
            entries: Vec::new(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append a section without an action
    pub fn add_section(&mut self, title: impl Into<String>) -> &mut Self {
        self.entries.push(SidebarEntry {
            title: title.into(),
            action: None,
        });
        self
    }

    /// Append a section whose action runs when the entry is activated
    pub fn add_section_with_action(
        &mut self,
        title: impl Into<String>,
        action: impl Fn(&mut dyn Host) -> Result<(), ComponentError> + 'static,
    ) -> &mut Self {
        self.entries.push(SidebarEntry {
            title: title.into(),
            action: Some(Box::new(action)),
        });
        self
    }

    pub fn entries(&self) -> &[SidebarEntry] {
        &self.entries
    }

    /// Render all entries inside the sidebar region
    pub fn render(&self, host: &mut dyn Host) -> Result<&Self, ComponentError> {
        scoped(host, Region::Sidebar, |h| {
            for entry in &self.entries {
                let request = ButtonRequest {
                    label: entry.title.clone(),
                    key: Some(entry.title.clone()),
                    ..Default::default()
                };
                if h.button(&request)? {
                    crate::log!("Sidebar::render - '{}' activated", entry.title);
                    if let Some(action) = &entry.action {
                        action(h)?;
                    }
                }
            }
            Ok::<(), ComponentError>(())
        })?;
        Ok(self)
    }
}

impl Component for Sidebar {
    fn render(&self, host: &mut dyn Host) -> Result<(), ComponentError> {
        Sidebar::render(self, host).map(|_| ())
    }
}
