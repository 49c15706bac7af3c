//! Layout component - host column slots and scoped layout helpers
//!
//! `columns` allocates slots; `with_columns` binds content one-to-one onto
//! them. The length precondition is checked before any slot is entered, so
//! a violation renders nothing.

use serde_json::Value;

use crate::host::{scoped, ColumnHandle, ColumnSpec, Gap, Host, Region};

use super::{auto_key, Component, ComponentError};

/// Content bound to one column slot
pub enum SlotContent {
    /// Callback executed inside the slot's scope
    Render(Box<dyn FnOnce(&mut dyn Host) -> Result<(), ComponentError>>),
    /// Component rendered inside the slot's scope
    Component(Box<dyn Component>),
    /// Raw value handed to the generic write primitive
    Value(Value),
}

impl SlotContent {
    pub fn render(
        body: impl FnOnce(&mut dyn Host) -> Result<(), ComponentError> + 'static,
    ) -> Self {
        SlotContent::Render(Box::new(body))
    }

    pub fn component(component: impl Component + 'static) -> Self {
        SlotContent::Component(Box::new(component))
    }

    pub fn value(value: impl Into<Value>) -> Self {
        SlotContent::Value(value.into())
    }

    /// A slot deliberately left empty
    pub fn empty() -> Self {
        Self::render(|_| Ok(()))
    }

    fn place(self, host: &mut dyn Host) -> Result<(), ComponentError> {
        match self {
            SlotContent::Render(body) => body(host),
            SlotContent::Component(component) => component.render(host),
            SlotContent::Value(value) => Ok(host.write(&value)?),
        }
    }
}

/// Column slot allocation and scoped layout helpers
pub struct Layout {
    key: String,
    slots: Vec<ColumnHandle>,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout {
    pub fn new() -> Self {
        Self {
            key: auto_key(),
            slots: Vec::new(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Currently allocated slots
    pub fn slots(&self) -> &[ColumnHandle] {
        &self.slots
    }

    /// Allocate column slots, replacing any previous allocation
    pub fn columns(
        &mut self,
        host: &mut dyn Host,
        spec: impl Into<ColumnSpec>,
        gap: Gap,
    ) -> Result<&mut Self, ComponentError> {
        let spec = spec.into();
        self.slots = host.allocate_columns(&spec, gap)?;
        crate::log!("Layout::columns - allocated {} slots", self.slots.len());
        Ok(self)
    }

    /// Bind content one-to-one onto the allocated slots.
    ///
    /// Fails with `TooManyItems` before entering any slot when `content`
    /// is longer than the allocation. Unpaired slots are left empty.
    pub fn with_columns(
        &self,
        host: &mut dyn Host,
        content: Vec<SlotContent>,
    ) -> Result<&Self, ComponentError> {
        if content.len() > self.slots.len() {
            return Err(ComponentError::TooManyItems {
                content: content.len(),
                slots: self.slots.len(),
            });
        }

        for (slot, item) in self.slots.iter().zip(content) {
            scoped(host, Region::Column(slot.clone()), |h| item.place(h))?;
        }
        Ok(self)
    }

    /// Horizontal divider
    pub fn divider(&self, host: &mut dyn Host) -> Result<&Self, ComponentError> {
        host.divider()?;
        Ok(self)
    }

    /// Vertical space: `height` empty writes
    pub fn spacer(&self, host: &mut dyn Host, height: usize) -> Result<&Self, ComponentError> {
        let blank = Value::String(String::new());
        for _ in 0..height {
            host.write(&blank)?;
        }
        Ok(self)
    }

    /// Run `body` inside an expander region
    pub fn expander(
        &self,
        host: &mut dyn Host,
        label: &str,
        expanded: bool,
        body: impl FnOnce(&mut dyn Host) -> Result<(), ComponentError>,
    ) -> Result<&Self, ComponentError> {
        let region = Region::Expander {
            label: label.to_string(),
            expanded,
        };
        scoped(host, region, body)?;
        Ok(self)
    }

    /// Run `body` inside a plain container region
    pub fn container(
        &self,
        host: &mut dyn Host,
        body: impl FnOnce(&mut dyn Host) -> Result<(), ComponentError>,
    ) -> Result<&Self, ComponentError> {
        scoped(host, Region::Container, body)?;
        Ok(self)
    }
}

impl Component for Layout {
    // A layout renders nothing by itself; content flows through
    // `with_columns` and the scoped helpers.
    fn render(&self, _host: &mut dyn Host) -> Result<(), ComponentError> {
        Ok(())
    }
}
