//! Recording host - a test double that captures every primitive call
//!
//! Button activations are scripted per label, the way an interactive pass
//! would report them.

use std::collections::HashSet;

use serde_json::Value;

use super::{
    ButtonRequest, ColumnHandle, ColumnSpec, Gap, HeadingLevel, Host, HostError, ImageRequest,
    Region,
};

/// One recorded primitive invocation
#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveCall {
    Write(Value),
    Text(String),
    Heading { text: String, level: HeadingLevel },
    Title(String),
    Subheader(String),
    Markup { markup: String, allow_unsafe_html: bool },
    CodeBlock { code: String, language: String },
    Image(ImageRequest),
    Button(ButtonRequest),
    AllocateColumns { spec: ColumnSpec, gap: Gap },
    Divider,
    EnterRegion(Region),
    ExitRegion,
}

/// Host implementation that records calls instead of drawing
#[derive(Default)]
pub struct RecordingHost {
    calls: Vec<PrimitiveCall>,
    activated: HashSet<String>,
    next_column: u64,
    depth: usize,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the button with this label to report activation
    pub fn activate_button(&mut self, label: impl Into<String>) -> &mut Self {
        self.activated.insert(label.into());
        self
    }

    /// All calls recorded so far, in invocation order
    pub fn calls(&self) -> &[PrimitiveCall] {
        &self.calls
    }

    /// Drain the recorded calls
    pub fn take_calls(&mut self) -> Vec<PrimitiveCall> {
        std::mem::take(&mut self.calls)
    }

    /// Current region nesting depth
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Host for RecordingHost {
    fn write(&mut self, value: &Value) -> Result<(), HostError> {
        self.calls.push(PrimitiveCall::Write(value.clone()));
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), HostError> {
        self.calls.push(PrimitiveCall::Text(text.to_string()));
        Ok(())
    }

    fn heading(&mut self, text: &str, level: HeadingLevel) -> Result<(), HostError> {
        self.calls.push(PrimitiveCall::Heading {
            text: text.to_string(),
            level,
        });
        Ok(())
    }

    fn title(&mut self, text: &str) -> Result<(), HostError> {
        self.calls.push(PrimitiveCall::Title(text.to_string()));
        Ok(())
    }

    fn subheader(&mut self, text: &str) -> Result<(), HostError> {
        self.calls.push(PrimitiveCall::Subheader(text.to_string()));
        Ok(())
    }

    fn markup(&mut self, markup: &str, allow_unsafe_html: bool) -> Result<(), HostError> {
        self.calls.push(PrimitiveCall::Markup {
            markup: markup.to_string(),
            allow_unsafe_html,
        });
        Ok(())
    }

    fn code_block(&mut self, code: &str, language: &str) -> Result<(), HostError> {
        self.calls.push(PrimitiveCall::CodeBlock {
            code: code.to_string(),
            language: language.to_string(),
        });
        Ok(())
    }

    fn image(&mut self, request: &ImageRequest) -> Result<(), HostError> {
        self.calls.push(PrimitiveCall::Image(request.clone()));
        Ok(())
    }

    fn button(&mut self, request: &ButtonRequest) -> Result<bool, HostError> {
        self.calls.push(PrimitiveCall::Button(request.clone()));
        Ok(self.activated.contains(&request.label))
    }

    fn allocate_columns(
        &mut self,
        spec: &ColumnSpec,
        gap: Gap,
    ) -> Result<Vec<ColumnHandle>, HostError> {
        self.calls.push(PrimitiveCall::AllocateColumns {
            spec: spec.clone(),
            gap,
        });
        let handles = (0..spec.slot_count())
            .map(|_| {
                let handle = ColumnHandle::new(self.next_column);
                self.next_column += 1;
                handle
            })
            .collect();
        Ok(handles)
    }

    fn divider(&mut self) -> Result<(), HostError> {
        self.calls.push(PrimitiveCall::Divider);
        Ok(())
    }

    fn enter_region(&mut self, region: Region) -> Result<(), HostError> {
        self.calls.push(PrimitiveCall::EnterRegion(region));
        self.depth += 1;
        Ok(())
    }

    fn exit_region(&mut self) -> Result<(), HostError> {
        if self.depth == 0 {
            return Err(HostError::RegionUnderflow);
        }
        self.depth -= 1;
        self.calls.push(PrimitiveCall::ExitRegion);
        Ok(())
    }
}
