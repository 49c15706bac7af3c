//! Button component
//!
//! Stores its options, forwards them as a [`ButtonRequest`], and runs the
//! bound action when the host reports activation.

use crate::host::{ButtonRequest, Host};

use super::{Action, Component, ComponentError};

/// A clickable button with an optional action
pub struct Button {
    label: String,
    action: Option<Action>,
    key: Option<String>,
    help: Option<String>,
    fit_container_width: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: None,
            key: None,
            help: None,
            fit_container_width: false,
        }
    }

    /// Bind an action to run on activation
    pub fn with_action(
        mut self,
        action: impl Fn(&mut dyn Host) -> Result<(), ComponentError> + 'static,
    ) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Tooltip text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Expand to the enclosing container width
    pub fn with_container_width(mut self, fit: bool) -> Self {
        self.fit_container_width = fit;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Render the button; returns whether it was activated this pass
    pub fn render(&self, host: &mut dyn Host) -> Result<bool, ComponentError> {
        let request = ButtonRequest {
            label: self.label.clone(),
            key: self.key.clone(),
            help: self.help.clone(),
            fit_container_width: self.fit_container_width,
        };
        let activated = host.button(&request)?;
        if activated {
            crate::log!("Button::render - '{}' activated", self.label);
            if let Some(action) = &self.action {
                action(host)?;
            }
        }
        Ok(activated)
    }
}

impl Component for Button {
    fn render(&self, host: &mut dyn Host) -> Result<(), ComponentError> {
        Button::render(self, host).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::host::{PrimitiveCall, RecordingHost};

    #[test]
    fn test_defaults() {
        let button = Button::new("Test Button");
        assert_eq!(button.label(), "Test Button");
        assert!(button.key().is_none());
        assert!(button.help().is_none());
        assert!(!button.has_action());
    }

    #[test]
    fn test_request_forwarding() {
        let mut host = RecordingHost::new();
        Button::new("Save")
            .with_key("save-btn")
            .with_help("Persists the draft")
            .with_container_width(true)
            .render(&mut host)
            .unwrap();
        assert_eq!(
            host.calls(),
            &[PrimitiveCall::Button(ButtonRequest {
                label: "Save".to_string(),
                key: Some("save-btn".to_string()),
                help: Some("Persists the draft".to_string()),
                fit_container_width: true,
            })]
        );
    }

    #[test]
    fn test_action_runs_on_activation() {
        let clicked = Rc::new(Cell::new(0));
        let counter = clicked.clone();
        let button = Button::new("Action Button")
            .with_action(move |_| {
                counter.set(counter.get() + 1);
                Ok(())
            });

        let mut host = RecordingHost::new();
        host.activate_button("Action Button");
        assert!(button.render(&mut host).unwrap());
        assert_eq!(clicked.get(), 1);
    }

    #[test]
    fn test_action_skipped_without_activation() {
        let clicked = Rc::new(Cell::new(0));
        let counter = clicked.clone();
        let button = Button::new("Idle Button").with_action(move |_| {
            counter.set(counter.get() + 1);
            Ok(())
        });

        let mut host = RecordingHost::new();
        assert!(!button.render(&mut host).unwrap());
        assert_eq!(clicked.get(), 0);
    }
}
