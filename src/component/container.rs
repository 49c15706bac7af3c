//! Container component - ordered children with three arrangements
//!
//! Children render in insertion order. Horizontal and column arrangements
//! place children into host-allocated column slots; the column arrangement
//! buckets child *i* into slot `i % columns` (round-robin, preserved for
//! compatibility).

use serde_json::Value;

use crate::host::{scoped, ColumnSpec, Gap, Host, Region};

use super::{auto_key, Child, Component, ComponentError};

/// How a container lays out its children
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Arrangement {
    /// Each child on its own block, in order
    #[default]
    Vertical,
    /// One equal column per child
    Horizontal,
    /// Round-robin over the given column count (children count when `None`)
    Columns(Option<usize>),
}

/// An ordered sequence of components or raw values
pub struct Container {
    key: String,
    children: Vec<Child>,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    pub fn new() -> Self {
        Self {
            key: auto_key(),
            children: Vec::new(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Append a component child
    pub fn add(&mut self, component: impl Component + 'static) -> &mut Self {
        self.children.push(Child::component(component));
        self
    }

    /// Append a raw value child
    pub fn add_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.children.push(Child::Value(value.into()));
        self
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Render all children with the given arrangement
    pub fn render(
        &self,
        host: &mut dyn Host,
        arrangement: Arrangement,
    ) -> Result<&Self, ComponentError> {
        if self.children.is_empty() {
            return Ok(self);
        }

        match arrangement {
            Arrangement::Vertical => {
                for child in &self.children {
                    child.render(host)?;
                }
            }
            Arrangement::Horizontal => {
                self.render_bucketed(host, self.children.len())?;
            }
            Arrangement::Columns(count) => {
                let columns = count.unwrap_or(self.children.len());
                self.render_bucketed(host, columns)?;
            }
        }

        Ok(self)
    }

    fn render_bucketed(&self, host: &mut dyn Host, columns: usize) -> Result<(), ComponentError> {
        if columns == 0 {
            return Err(ComponentError::InvalidColumnCount);
        }

        let slots = host.allocate_columns(&ColumnSpec::Count(columns), Gap::default())?;
        for (index, child) in self.children.iter().enumerate() {
            let slot = slots[index % columns].clone();
            scoped(host, Region::Column(slot), |h| child.render(h))?;
        }
        Ok(())
    }
}

impl Component for Container {
    fn render(&self, host: &mut dyn Host) -> Result<(), ComponentError> {
        Container::render(self, host, Arrangement::Vertical).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Text;
    use crate::host::{ColumnHandle, PrimitiveCall, RecordingHost};

    fn entered_columns(host: &RecordingHost) -> Vec<ColumnHandle> {
        host.calls()
            .iter()
            .filter_map(|call| match call {
                PrimitiveCall::EnterRegion(Region::Column(handle)) => Some(handle.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_add_preserves_order() {
        let mut container = Container::new();
        container.add(Text::new("first")).add(Text::new("second"));
        container.add_value("third");
        assert_eq!(container.children().len(), 3);

        let mut host = RecordingHost::new();
        container.render(&mut host, Arrangement::Vertical).unwrap();
        assert_eq!(
            host.calls(),
            &[
                PrimitiveCall::Text("first".to_string()),
                PrimitiveCall::Text("second".to_string()),
                PrimitiveCall::Write(Value::String("third".to_string())),
            ]
        );
    }

    #[test]
    fn test_horizontal_allocates_one_slot_per_child() {
        let mut container = Container::new();
        container.add(Text::new("a")).add(Text::new("b"));

        let mut host = RecordingHost::new();
        container.render(&mut host, Arrangement::Horizontal).unwrap();
        assert_eq!(
            host.calls()[0],
            PrimitiveCall::AllocateColumns {
                spec: ColumnSpec::Count(2),
                gap: Gap::Small,
            }
        );
        let entered = entered_columns(&host);
        assert_eq!(entered.len(), 2);
        assert_ne!(entered[0], entered[1]);
    }

    #[test]
    fn test_columns_round_robin() {
        // Five children over three columns land in slots 0,1,2,0,1.
        let mut container = Container::new();
        for i in 0..5 {
            container.add_value(format!("child {}", i));
        }

        let mut host = RecordingHost::new();
        container
            .render(&mut host, Arrangement::Columns(Some(3)))
            .unwrap();

        let entered = entered_columns(&host);
        let ids: Vec<u64> = entered.iter().map(|h| h.id()).collect();
        assert_eq!(ids, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_columns_default_to_child_count() {
        let mut container = Container::new();
        container.add_value("a").add_value("b");

        let mut host = RecordingHost::new();
        container
            .render(&mut host, Arrangement::Columns(None))
            .unwrap();
        assert_eq!(
            host.calls()[0],
            PrimitiveCall::AllocateColumns {
                spec: ColumnSpec::Count(2),
                gap: Gap::Small,
            }
        );
    }

    #[test]
    fn test_zero_columns_rejected() {
        let mut container = Container::new();
        container.add_value("a");

        let mut host = RecordingHost::new();
        let result = container.render(&mut host, Arrangement::Columns(Some(0)));
        assert!(matches!(result, Err(ComponentError::InvalidColumnCount)));
    }

    #[test]
    fn test_empty_container_renders_nothing() {
        let container = Container::new();
        let mut host = RecordingHost::new();
        container.render(&mut host, Arrangement::Horizontal).unwrap();
        assert!(host.calls().is_empty());
    }
}
