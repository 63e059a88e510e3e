//! Selection controls: combo boxes, object combo boxes, radio groups.

use guitools_core::{Control, Layout, Value, ValueControl};

use crate::edit::Label;
use crate::layout::{Anchor, Edge, Frame, Rect};
use crate::sizing;

fn stretch_to_owner(frame: &mut Frame) {
    frame.set_constraint(Edge::Right, Anchor::Owner, Edge::Right, -sizing::RIGHT_MARGIN);
}

fn label_rect(wl: i32, x: i32, y: i32, h: i32) -> Rect {
    Rect::new(x, y + sizing::LABEL_OFFSET, wl, h - sizing::LABEL_OFFSET)
}

/// An editable combo box of strings. Its value is the displayed text.
pub struct ComboBox {
    items: Vec<String>,
    text: String,
    frame: Frame,
}

impl ComboBox {
    pub fn new(x: i32, y: i32, w: i32) -> Self {
        Self {
            items: Vec::new(),
            text: String::new(),
            frame: Frame::new(Rect::new(x, y, w, sizing::COMBO_BOX_HEIGHT)),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn set_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Index of the item matching the text, if any.
    pub fn selection(&self) -> Option<usize> {
        self.items.iter().position(|item| *item == self.text)
    }

    /// Select an item by index. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if let Some(item) = self.items.get(index) {
            self.text = item.clone();
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl Control for ComboBox {
    fn set_visible(&mut self, show: bool) {
        self.frame.set_visible(show);
    }

    fn layout(&mut self) -> Option<&mut dyn Layout> {
        Some(self)
    }
}

impl Layout for ComboBox {
    fn apply_layout(&mut self) {
        stretch_to_owner(&mut self.frame);
    }
}

impl ValueControl for ComboBox {
    fn value(&self) -> Value {
        Value::Text(self.text.clone())
    }

    fn set_value(&mut self, value: Value) {
        self.text = value.into_text();
    }
}

/// A label followed by a combo box.
pub struct StaticComboBox {
    label: Label,
    combo: ComboBox,
}

impl StaticComboBox {
    pub fn new(text: &str, wl: i32, x: i32, y: i32, w: i32) -> Self {
        Self {
            label: Label::new(text, label_rect(wl, x, y, sizing::COMBO_BOX_HEIGHT)),
            combo: ComboBox::new(x + wl, y, w - wl),
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn combo(&self) -> &ComboBox {
        &self.combo
    }

    pub fn combo_mut(&mut self) -> &mut ComboBox {
        &mut self.combo
    }
}

impl Control for StaticComboBox {
    fn set_visible(&mut self, show: bool) {
        self.combo.set_visible(show);
        self.label.set_visible(show);
    }

    fn layout(&mut self) -> Option<&mut dyn Layout> {
        Some(&mut self.combo)
    }
}

impl ValueControl for StaticComboBox {
    fn value(&self) -> Value {
        self.combo.value()
    }

    fn set_value(&mut self, value: Value) {
        self.combo.set_value(value);
    }
}

/// A read-only combo box of objects.
///
/// Items are displayed with `label_of`; the exchanged value is the label of
/// the selected object, and setting a value selects the first object with
/// that label, or clears the selection when none matches.
pub struct ObjectComboBox<T> {
    items: Vec<T>,
    selection: Option<usize>,
    label_of: fn(&T) -> String,
    frame: Frame,
}

impl<T> ObjectComboBox<T> {
    pub fn new(x: i32, y: i32, w: i32, label_of: fn(&T) -> String) -> Self {
        Self {
            items: Vec::new(),
            selection: None,
            label_of,
            frame: Frame::new(Rect::new(x, y, w, sizing::COMBO_BOX_HEIGHT)),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replace the items. The selection is cleared.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.selection = None;
    }

    /// Selected object, if any.
    pub fn selection(&self) -> Option<&T> {
        self.selection.and_then(|i| self.items.get(i))
    }

    /// Select the first item matching `label`.
    pub fn select_label(&mut self, label: &str) {
        self.selection = self.items.iter().position(|item| (self.label_of)(item) == label);
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl<T: PartialEq> ObjectComboBox<T> {
    /// Select an object, `None` or an unknown object clearing the selection.
    pub fn set_selection(&mut self, object: Option<&T>) {
        self.selection = object.and_then(|o| self.items.iter().position(|item| item == o));
    }
}

impl<T> Control for ObjectComboBox<T> {
    fn set_visible(&mut self, show: bool) {
        self.frame.set_visible(show);
    }

    fn layout(&mut self) -> Option<&mut dyn Layout> {
        Some(self)
    }
}

impl<T> Layout for ObjectComboBox<T> {
    fn apply_layout(&mut self) {
        stretch_to_owner(&mut self.frame);
    }
}

impl<T> ValueControl for ObjectComboBox<T> {
    fn value(&self) -> Value {
        Value::Text(self.selection().map(self.label_of).unwrap_or_default())
    }

    fn set_value(&mut self, value: Value) {
        self.select_label(&value.into_text());
    }
}

/// A label followed by an object combo box.
pub struct StaticObjectComboBox<T> {
    label: Label,
    combo: ObjectComboBox<T>,
}

impl<T> StaticObjectComboBox<T> {
    pub fn new(text: &str, wl: i32, x: i32, y: i32, w: i32, label_of: fn(&T) -> String) -> Self {
        Self {
            label: Label::new(text, label_rect(wl, x, y, sizing::COMBO_BOX_HEIGHT)),
            combo: ObjectComboBox::new(x + wl, y, w - wl, label_of),
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn combo(&self) -> &ObjectComboBox<T> {
        &self.combo
    }

    pub fn combo_mut(&mut self) -> &mut ObjectComboBox<T> {
        &mut self.combo
    }
}

impl<T> Control for StaticObjectComboBox<T> {
    fn set_visible(&mut self, show: bool) {
        self.combo.set_visible(show);
        self.label.set_visible(show);
    }

    fn layout(&mut self) -> Option<&mut dyn Layout> {
        Some(&mut self.combo)
    }
}

impl<T> ValueControl for StaticObjectComboBox<T> {
    fn value(&self) -> Value {
        self.combo.value()
    }

    fn set_value(&mut self, value: Value) {
        self.combo.set_value(value);
    }
}

/// A group of radio buttons laid out on one line.
///
/// Each option is a `(value, text)` pair; the exchanged value is the
/// value of the checked option, or an empty string when none is.
pub struct RadioBox {
    options: Vec<(String, String)>,
    checked: Option<usize>,
    frame: Frame,
}

impl RadioBox {
    pub fn new(options: &[(&str, &str)], x: i32, y: i32, w: i32) -> Self {
        Self {
            options: options
                .iter()
                .map(|(value, text)| (value.to_string(), text.to_string()))
                .collect(),
            checked: None,
            frame: Frame::new(Rect::new(x, y, w, sizing::RADIO_BUTTON_HEIGHT)),
        }
    }

    pub fn options(&self) -> &[(String, String)] {
        &self.options
    }

    /// Value of the checked option.
    pub fn checked(&self) -> Option<&str> {
        self.checked.map(|i| self.options[i].0.as_str())
    }

    /// Check the option with the given value, or none if unknown.
    pub fn check(&mut self, value: &str) {
        self.checked = self.options.iter().position(|(v, _)| v == value);
    }

    /// Geometry of each radio button, sharing the width equally.
    pub fn button_rects(&self) -> Vec<Rect> {
        let rect = self.frame.rect();
        let count = self.options.len().max(1) as i32;
        let w = rect.w / count;
        (0..self.options.len() as i32)
            .map(|i| Rect::new(rect.x + i * w, rect.y, w, rect.h))
            .collect()
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl Control for RadioBox {
    fn set_visible(&mut self, show: bool) {
        self.frame.set_visible(show);
    }
}

impl ValueControl for RadioBox {
    fn value(&self) -> Value {
        Value::Text(self.checked().unwrap_or_default().to_string())
    }

    fn set_value(&mut self, value: Value) {
        self.check(&value.into_text());
    }
}

/// A label followed by a radio group.
pub struct StaticRadioBox {
    label: Label,
    radio: RadioBox,
}

impl StaticRadioBox {
    pub fn new(text: &str, options: &[(&str, &str)], wl: i32, x: i32, y: i32, w: i32) -> Self {
        Self {
            label: Label::new(text, label_rect(wl, x, y, sizing::RADIO_BUTTON_HEIGHT)),
            radio: RadioBox::new(options, x + wl, y, w - wl),
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn radio(&self) -> &RadioBox {
        &self.radio
    }

    pub fn radio_mut(&mut self) -> &mut RadioBox {
        &mut self.radio
    }
}

impl Control for StaticRadioBox {
    fn set_visible(&mut self, show: bool) {
        self.radio.set_visible(show);
        self.label.set_visible(show);
    }
}

impl ValueControl for StaticRadioBox {
    fn value(&self) -> Value {
        self.radio.value()
    }

    fn set_value(&mut self, value: Value) {
        self.radio.set_value(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct FileRef {
        name: String,
    }

    fn file(name: &str) -> FileRef {
        FileRef { name: name.to_string() }
    }

    fn name_of(f: &FileRef) -> String {
        f.name.clone()
    }

    #[test]
    fn test_object_combo_select_by_label() {
        let mut ocb = ObjectComboBox::new(0, 0, 100, name_of);
        ocb.set_items(vec![file("a.scade"), file("b.scade")]);

        ocb.set_value(Value::from("b.scade"));
        assert_eq!(ocb.selection(), Some(&file("b.scade")));
        assert_eq!(ocb.value(), Value::from("b.scade"));

        ocb.set_value(Value::from("missing"));
        assert_eq!(ocb.selection(), None);
        assert_eq!(ocb.value(), Value::from(""));
    }

    #[test]
    fn test_object_combo_select_by_identity() {
        let mut ocb = ObjectComboBox::new(0, 0, 100, name_of);
        ocb.set_items(vec![file("a"), file("b")]);

        ocb.set_selection(Some(&file("a")));
        assert_eq!(ocb.value(), Value::from("a"));

        ocb.set_selection(None);
        assert!(ocb.selection().is_none());
    }

    #[test]
    fn test_combo_selection_follows_text() {
        let mut cb = ComboBox::new(0, 0, 100);
        cb.set_items(["x", "y"]);
        cb.select(1);
        assert_eq!(cb.value(), Value::from("y"));

        cb.set_value(Value::from("free text"));
        assert_eq!(cb.selection(), None);
    }

    #[test]
    fn test_radio_box_value() {
        let mut rb = StaticRadioBox::new(
            "&Color",
            &[("blue", "&Blue"), ("white", "&White"), ("red", "&Red")],
            50, 15, 7, 350,
        );
        assert_eq!(rb.value(), Value::from(""));

        rb.set_value(Value::from("red"));
        assert_eq!(rb.radio().checked(), Some("red"));
        assert_eq!(rb.radio().button_rects()[2], Rect::new(265, 7, 100, 20));
    }

    #[test]
    fn test_static_combo_visibility() {
        let mut scb = StaticComboBox::new("Paths", 50, 15, 7, 200);
        scb.set_visible(false);

        assert!(!scb.label().frame().is_visible());
        assert!(!scb.combo().frame().is_visible());
    }
}
