//! Console host - renders primitives as indented plain text
//!
//! Backs the demo binary. Buttons are drawn but never report activation;
//! the console is not interactive.

use std::io::{self, Write};

use serde_json::Value;

use super::{
    ButtonRequest, ColumnHandle, ColumnSpec, Gap, HeadingLevel, Host, HostError, ImageRequest,
    ImageSource, Region,
};

/// Host implementation writing text to any `io::Write`
pub struct ConsoleHost<W: Write> {
    out: W,
    depth: usize,
    next_column: u64,
}

impl ConsoleHost<io::Stdout> {
    /// Console host on standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleHost<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            depth: 0,
            next_column: 0,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) -> Result<(), HostError> {
        for part in text.split('\n') {
            writeln!(self.out, "{}{}", "  ".repeat(self.depth), part)?;
        }
        Ok(())
    }
}

impl<W: Write> Host for ConsoleHost<W> {
    fn write(&mut self, value: &Value) -> Result<(), HostError> {
        match value {
            Value::String(s) => self.line(s),
            other => {
                let rendered = other.to_string();
                self.line(&rendered)
            }
        }
    }

    fn text(&mut self, text: &str) -> Result<(), HostError> {
        self.line(text)
    }

    fn heading(&mut self, text: &str, level: HeadingLevel) -> Result<(), HostError> {
        let marks = "#".repeat(level.level() as usize);
        self.line(&format!("{} {}", marks, text))
    }

    fn title(&mut self, text: &str) -> Result<(), HostError> {
        self.line(text)?;
        self.line(&"=".repeat(text.chars().count()))
    }

    fn subheader(&mut self, text: &str) -> Result<(), HostError> {
        self.line(text)?;
        self.line(&"-".repeat(text.chars().count()))
    }

    fn markup(&mut self, markup: &str, _allow_unsafe_html: bool) -> Result<(), HostError> {
        self.line(markup)
    }

    fn code_block(&mut self, code: &str, language: &str) -> Result<(), HostError> {
        self.line(&format!("```{}", language))?;
        self.line(code)?;
        self.line("```")
    }

    fn image(&mut self, request: &ImageRequest) -> Result<(), HostError> {
        let source = match &request.source {
            ImageSource::Path(path) => path.clone(),
            ImageSource::Bytes(bytes) => format!("<{} bytes>", bytes.len()),
        };
        let mut parts = vec![format!("image: {}", source)];
        if let Some(caption) = &request.caption {
            parts.push(format!("caption: {}", caption));
        }
        if let Some(width) = request.width {
            parts.push(format!("width: {}", width));
        }
        self.line(&format!("[{}]", parts.join(", ")))
    }

    fn button(&mut self, request: &ButtonRequest) -> Result<bool, HostError> {
        self.line(&format!("[ {} ]", request.label))?;
        Ok(false)
    }

    fn allocate_columns(
        &mut self,
        spec: &ColumnSpec,
        _gap: Gap,
    ) -> Result<Vec<ColumnHandle>, HostError> {
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
        self.line("--------")
    }

    fn enter_region(&mut self, region: Region) -> Result<(), HostError> {
        match &region {
            Region::Expander { label, expanded } => {
                let marker = if *expanded { "v" } else { ">" };
                self.line(&format!("{} {}", marker, label))?;
            }
            Region::Sidebar => self.line("[sidebar]")?,
            Region::Column(_) | Region::Container => {}
        }
        self.depth += 1;
        Ok(())
    }

    fn exit_region(&mut self) -> Result<(), HostError> {
        if self.depth == 0 {
            return Err(HostError::RegionUnderflow);
        }
        self.depth -= 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(host: ConsoleHost<Vec<u8>>) -> String {
        String::from_utf8(host.into_inner()).unwrap()
    }

    #[test]
    fn test_heading_markers() {
        let mut host = ConsoleHost::new(Vec::new());
        host.heading("One", HeadingLevel::H1).unwrap();
        host.heading("Three", HeadingLevel::H3).unwrap();
        assert_eq!(rendered(host), "# One\n### Three\n");
    }

    #[test]
    fn test_region_indentation() {
        let mut host = ConsoleHost::new(Vec::new());
        host.enter_region(Region::Container).unwrap();
        host.text("inside").unwrap();
        host.exit_region().unwrap();
        host.text("outside").unwrap();
        assert_eq!(rendered(host), "  inside\noutside\n");
    }

    #[test]
    fn test_write_strings_without_quotes() {
        let mut host = ConsoleHost::new(Vec::new());
        host.write(&Value::String("plain".to_string())).unwrap();
        host.write(&serde_json::json!(42)).unwrap();
        assert_eq!(rendered(host), "plain\n42\n");
    }

    #[test]
    fn test_button_never_activates() {
        let mut host = ConsoleHost::new(Vec::new());
        let request = ButtonRequest {
            label: "Go".to_string(),
            ..Default::default()
        };
        assert!(!host.button(&request).unwrap());
        assert_eq!(rendered(host), "[ Go ]\n");
    }

    #[test]
    fn test_code_block_fencing() {
        let mut host = ConsoleHost::new(Vec::new());
        host.code_block("{\n  \"a\": 1\n}", "json").unwrap();
        assert_eq!(rendered(host), "```json\n{\n  \"a\": 1\n}\n```\n");
    }
}
