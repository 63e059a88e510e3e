//! Button controls: push buttons and check buttons.

use guitools_core::{Control, Value, ValueControl};

use crate::layout::{Frame, Rect};
use crate::sizing;

/// A push button with a default size and an optional click handler.
pub struct PushButton {
    name: String,
    frame: Frame,
    on_click: Option<Box<dyn FnMut()>>,
}

impl PushButton {
    /// Create a push button of the default size.
    pub fn new(name: &str, x: i32, y: i32) -> Self {
        Self::with_size(name, Rect::new(x, y, sizing::BUTTON_WIDTH, sizing::BUTTON_HEIGHT))
    }

    /// Create a push button with an explicit geometry.
    pub fn with_size(name: &str, rect: Rect) -> Self {
        Self {
            name: name.to_string(),
            frame: Frame::new(rect),
            on_click: None,
        }
    }

    /// Set the click handler.
    pub fn on_click(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Simulate a click, as the host does when the user presses the button.
    pub fn click(&mut self) {
        if let Some(handler) = self.on_click.as_mut() {
            handler();
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }
}

impl Control for PushButton {
    fn set_visible(&mut self, show: bool) {
        self.frame.set_visible(show);
    }
}

/// A check button with a default height.
pub struct CheckButton {
    text: String,
    checked: bool,
    frame: Frame,
}

impl CheckButton {
    pub fn new(text: &str, x: i32, y: i32, w: i32) -> Self {
        Self {
            text: text.to_string(),
            checked: false,
            frame: Frame::new(Rect::new(x, y, w, sizing::CHECK_BUTTON_HEIGHT)),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl Control for CheckButton {
    fn set_visible(&mut self, show: bool) {
        self.frame.set_visible(show);
    }
}

impl ValueControl for CheckButton {
    fn value(&self) -> Value {
        Value::Bool(self.checked)
    }

    fn set_value(&mut self, value: Value) {
        self.checked = value.as_bool();
    }
}
