//! Component layer
//!
//! Components store their constructor arguments and forward them to the
//! host runtime on render. Anything that renders is a [`Component`]; the
//! trait is the whole contract, leaf types are plain structs implementing
//! it.

pub mod button;
pub mod container;
pub mod header;
pub mod image;
pub mod json_display;
pub mod layout;
pub mod sidebar;
pub mod style;
pub mod text;
pub mod title;

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;
use thiserror::Error;

use crate::host::{Host, HostError};

pub use button::Button;
pub use container::{Arrangement, Container};
pub use header::Header;
pub use image::ImageDisplay;
pub use json_display::JsonDisplay;
pub use layout::{Layout, SlotContent};
pub use sidebar::{Sidebar, SidebarEntry};
pub use style::Style;
pub use text::Text;
pub use title::Title;

/// Component layer errors
#[derive(Error, Debug)]
pub enum ComponentError {
    /// More column content than allocated slots; nothing was rendered
    #[error("more content items than allocated columns: {content} > {slots}")]
    TooManyItems { content: usize, slots: usize },

    /// A column arrangement resolved to zero columns
    #[error("column count must be at least 1")]
    InvalidColumnCount,

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Host primitive failure, propagated unchanged
    #[error("host error: {0}")]
    Host(#[from] HostError),
}

/// Anything that can render itself against a host runtime
pub trait Component {
    fn render(&self, host: &mut dyn Host) -> Result<(), ComponentError>;
}

/// Callback invoked with the live host (button and sidebar actions)
pub type Action = Box<dyn Fn(&mut dyn Host) -> Result<(), ComponentError>>;

static NEXT_KEY: AtomicU64 = AtomicU64::new(0);

/// Allocate a process-unique component key
pub fn auto_key() -> String {
    let n = NEXT_KEY.fetch_add(1, Ordering::Relaxed);
    format!("component_{}", n)
}

/// A container child: a component or an opaque raw value
pub enum Child {
    Component(Box<dyn Component>),
    Value(Value),
}

impl Child {
    pub fn component(component: impl Component + 'static) -> Self {
        Child::Component(Box::new(component))
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Child::Value(value.into())
    }

    /// Render a component child, or hand a raw value to the generic write
    pub fn render(&self, host: &mut dyn Host) -> Result<(), ComponentError> {
        match self {
            Child::Component(component) => component.render(host),
            Child::Value(value) => Ok(host.write(value)?),
        }
    }
}
