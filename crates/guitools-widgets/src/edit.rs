//! Text controls: labels, edits, and static + edit bundles.

use guitools_core::{Control, Layout, Value, ValueControl};

use crate::layout::{Anchor, Edge, Frame, Rect};
use crate::sizing;

/// A static text.
pub struct Label {
    text: String,
    frame: Frame,
}

impl Label {
    pub fn new(text: &str, rect: Rect) -> Self {
        Self {
            text: text.to_string(),
            frame: Frame::new(rect),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl Control for Label {
    fn set_visible(&mut self, show: bool) {
        self.frame.set_visible(show);
    }
}

/// An edit control with a default height, stretched to the owner's right edge.
pub struct Edit {
    text: String,
    frame: Frame,
}

impl Edit {
    pub fn new(x: i32, y: i32, w: i32) -> Self {
        Self::with_height(x, y, w, sizing::EDIT_HEIGHT)
    }

    pub fn with_height(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            text: String::new(),
            frame: Frame::new(Rect::new(x, y, w, h)),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }
}

impl Control for Edit {
    fn set_visible(&mut self, show: bool) {
        self.frame.set_visible(show);
    }

    fn layout(&mut self) -> Option<&mut dyn Layout> {
        Some(self)
    }
}

impl Layout for Edit {
    fn apply_layout(&mut self) {
        self.frame
            .set_constraint(Edge::Right, Anchor::Owner, Edge::Right, -sizing::RIGHT_MARGIN);
    }
}

impl ValueControl for Edit {
    fn value(&self) -> Value {
        Value::Text(self.text.clone())
    }

    fn set_value(&mut self, value: Value) {
        self.text = value.into_text();
    }
}

/// A label followed by an edit on the same line.
///
/// The label takes the first `wl` units of the width.
pub struct StaticEdit {
    label: Label,
    edit: Edit,
}

impl StaticEdit {
    pub fn new(text: &str, wl: i32, x: i32, y: i32, w: i32) -> Self {
        Self::with_height(text, wl, x, y, w, sizing::EDIT_HEIGHT)
    }

    pub fn with_height(text: &str, wl: i32, x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            label: Label::new(
                text,
                Rect::new(x, y + sizing::LABEL_OFFSET, wl, h - sizing::LABEL_OFFSET),
            ),
            edit: Edit::with_height(x + wl, y, w - wl, h),
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn edit(&self) -> &Edit {
        &self.edit
    }

    pub fn edit_mut(&mut self) -> &mut Edit {
        &mut self.edit
    }

    pub fn text(&self) -> &str {
        self.edit.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.edit.set_text(text);
    }
}

impl Control for StaticEdit {
    fn set_visible(&mut self, show: bool) {
        self.edit.set_visible(show);
        self.label.set_visible(show);
    }

    fn layout(&mut self) -> Option<&mut dyn Layout> {
        Some(&mut self.edit)
    }
}

impl ValueControl for StaticEdit {
    fn value(&self) -> Value {
        self.edit.value()
    }

    fn set_value(&mut self, value: Value) {
        self.edit.set_value(value);
    }
}
