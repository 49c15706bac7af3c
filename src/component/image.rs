//! Image display component

use crate::host::{Host, ImageRequest, ImageSource};

use super::{auto_key, Component, ComponentError};

/// An image leaf with optional caption and sizing
pub struct ImageDisplay {
    source: ImageSource,
    key: String,
    caption: Option<String>,
    width: Option<u32>,
    fit_column_width: bool,
}

impl ImageDisplay {
    /// Image resolved by the host from a path or URL
    pub fn from_path(path: impl Into<String>) -> Self {
        Self::new(ImageSource::Path(path.into()))
    }

    /// Image from in-memory bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::new(ImageSource::Bytes(bytes))
    }

    fn new(source: ImageSource) -> Self {
        Self {
            source,
            key: auto_key(),
            caption: None,
            width: None,
            fit_column_width: false,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Expand to the enclosing column width
    pub fn with_column_width(mut self, fit: bool) -> Self {
        self.fit_column_width = fit;
        self
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Forward to the image primitive
    pub fn render(&self, host: &mut dyn Host) -> Result<(), ComponentError> {
        let request = ImageRequest {
            source: self.source.clone(),
            caption: self.caption.clone(),
            width: self.width,
            fit_column_width: self.fit_column_width,
        };
        Ok(host.image(&request)?)
    }
}

impl Component for ImageDisplay {
    fn render(&self, host: &mut dyn Host) -> Result<(), ComponentError> {
        ImageDisplay::render(self, host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{PrimitiveCall, RecordingHost};

    #[test]
    fn test_path_source() {
        let image = ImageDisplay::from_path("hero.png");
        assert_eq!(image.source(), &ImageSource::Path("hero.png".to_string()));
    }

    #[test]
    fn test_render_options_forwarded() {
        let mut host = RecordingHost::new();
        ImageDisplay::from_path("hero.png")
            .with_caption("Test Caption")
            .with_width(100)
            .with_column_width(true)
            .render(&mut host)
            .unwrap();
        assert_eq!(
            host.calls(),
            &[PrimitiveCall::Image(ImageRequest {
                source: ImageSource::Path("hero.png".to_string()),
                caption: Some("Test Caption".to_string()),
                width: Some(100),
                fit_column_width: true,
            })]
        );
    }

    #[test]
    fn test_bytes_source_forwarded() {
        let mut host = RecordingHost::new();
        ImageDisplay::from_bytes(vec![0xff, 0xd8])
            .render(&mut host)
            .unwrap();
        match &host.calls()[0] {
            PrimitiveCall::Image(request) => {
                assert_eq!(request.source, ImageSource::Bytes(vec![0xff, 0xd8]));
                assert!(request.caption.is_none());
                assert!(request.width.is_none());
            }
            other => panic!("unexpected call: {:?}", other),
        }
    }
}
