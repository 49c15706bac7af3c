//! Host runtime boundary
//!
//! The host runtime owns actual drawing, input handling, and re-execution
//! scheduling. This layer only ever talks to it through the [`Host`] trait,
//! so components stay testable without a live runtime.

pub mod console;
pub mod recording;

use serde_json::Value;
use thiserror::Error;

pub use console::ConsoleHost;
pub use recording::{PrimitiveCall, RecordingHost};

/// Errors reported by host primitives
#[derive(Error, Debug)]
pub enum HostError {
    /// IO failure while emitting output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure, carried as text
    #[error("Backend error: {0}")]
    Backend(String),

    /// Region exit without a matching enter
    #[error("region exit without matching enter")]
    RegionUnderflow,
}

/// Heading levels 1-6
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    #[default]
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Parse a numeric level (1-6)
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            4 => Some(HeadingLevel::H4),
            5 => Some(HeadingLevel::H5),
            6 => Some(HeadingLevel::H6),
            _ => None,
        }
    }

    /// Numeric level (1-6)
    pub fn level(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }
}

/// Space between allocated columns
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gap {
    #[default]
    Small,
    Medium,
    Large,
}

impl Gap {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "small" => Some(Gap::Small),
            "medium" => Some(Gap::Medium),
            "large" => Some(Gap::Large),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gap::Small => "small",
            Gap::Medium => "medium",
            Gap::Large => "large",
        }
    }
}

/// Column allocation request: an equal-width count or relative width weights
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnSpec {
    Count(usize),
    Weights(Vec<u32>),
}

impl ColumnSpec {
    /// Number of slots this spec allocates
    pub fn slot_count(&self) -> usize {
        match self {
            ColumnSpec::Count(n) => *n,
            ColumnSpec::Weights(weights) => weights.len(),
        }
    }
}

impl From<usize> for ColumnSpec {
    fn from(count: usize) -> Self {
        ColumnSpec::Count(count)
    }
}

impl From<Vec<u32>> for ColumnSpec {
    fn from(weights: Vec<u32>) -> Self {
        ColumnSpec::Weights(weights)
    }
}

/// Opaque handle to a host-allocated layout column
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColumnHandle(u64);

impl ColumnHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A scoped output region owned by the host
#[derive(Clone, Debug, PartialEq)]
pub enum Region {
    Column(ColumnHandle),
    Expander { label: String, expanded: bool },
    Container,
    Sidebar,
}

/// Image source: a path the host resolves, or raw bytes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Path(String),
    Bytes(Vec<u8>),
}

/// Arguments for the image primitive
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRequest {
    pub source: ImageSource,
    /// Caption below the image (none by default)
    pub caption: Option<String>,
    /// Explicit width in pixels (host decides when absent)
    pub width: Option<u32>,
    /// Expand to the enclosing column width (off by default)
    pub fit_column_width: bool,
}

/// Arguments for the button primitive
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonRequest {
    pub label: String,
    /// Unique widget key (host derives one when absent)
    pub key: Option<String>,
    /// Tooltip text (none by default)
    pub help: Option<String>,
    /// Expand to the enclosing container width (off by default)
    pub fit_container_width: bool,
}

/// The primitive operations a host runtime must supply
pub trait Host {
    /// Generic write for opaque values
    fn write(&mut self, value: &Value) -> Result<(), HostError>;

    /// Plain text line
    fn text(&mut self, text: &str) -> Result<(), HostError>;

    /// Heading at the given level
    fn heading(&mut self, text: &str, level: HeadingLevel) -> Result<(), HostError>;

    /// Page title
    fn title(&mut self, text: &str) -> Result<(), HostError>;

    /// Subheader below a title
    fn subheader(&mut self, text: &str) -> Result<(), HostError>;

    /// Raw markup; `allow_unsafe_html` permits embedded HTML
    fn markup(&mut self, markup: &str, allow_unsafe_html: bool) -> Result<(), HostError>;

    /// Syntax-highlighted code block
    fn code_block(&mut self, code: &str, language: &str) -> Result<(), HostError>;

    /// Image with optional caption and sizing
    fn image(&mut self, request: &ImageRequest) -> Result<(), HostError>;

    /// Clickable button; returns whether it was activated this pass
    fn button(&mut self, request: &ButtonRequest) -> Result<bool, HostError>;

    /// Allocate layout columns and return their handles
    fn allocate_columns(
        &mut self,
        spec: &ColumnSpec,
        gap: Gap,
    ) -> Result<Vec<ColumnHandle>, HostError>;

    /// Horizontal divider
    fn divider(&mut self) -> Result<(), HostError>;

    /// Enter a scoped output region
    fn enter_region(&mut self, region: Region) -> Result<(), HostError>;

    /// Exit the innermost region
    fn exit_region(&mut self) -> Result<(), HostError>;
}

/// Run `body` inside `region`, exiting the region even when the body fails.
///
/// The body's error wins when both the body and the exit fail.
pub fn scoped<R, E>(
    host: &mut dyn Host,
    region: Region,
    body: impl FnOnce(&mut dyn Host) -> Result<R, E>,
) -> Result<R, E>
where
    E: From<HostError>,
{
    host.enter_region(region)?;
    let result = body(host);
    let exited = host.exit_region();
    match result {
        Ok(value) => exited.map(|_| value).map_err(E::from),
        Err(err) => Err(err),
    }
}
