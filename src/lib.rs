//! Pergola - a typed component layer for Streamlit-style data-app runtimes
//!
//! Components store their constructor arguments and, on render, forward
//! them to an injected [`Host`] runtime supplying the primitive drawing
//! operations. The layer is stateless across render passes; the host owns
//! re-execution, input, and any cross-pass state.

// Include the log module so the log! macro works
#[macro_use]
pub mod log;

pub mod component;
pub mod config;
pub mod host;

pub use component::{
    auto_key, Action, Arrangement, Button, Child, Component, ComponentError, Container, Header,
    ImageDisplay, JsonDisplay, Layout, Sidebar, SidebarEntry, SlotContent, Style, Text, Title,
};
pub use host::{
    scoped, ButtonRequest, ColumnHandle, ColumnSpec, ConsoleHost, Gap, HeadingLevel, Host,
    HostError, ImageRequest, ImageSource, PrimitiveCall, RecordingHost, Region,
};
