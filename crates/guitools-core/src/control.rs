//! Control capabilities consumed from the host widget toolkit.

use crate::value::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a control placed on a page.
///
/// Pages run on the host's UI thread only, so controls are shared with
/// `Rc<RefCell<_>>` between the page, its registry and its bindings.
pub type ControlHandle = Rc<RefCell<dyn Control>>;

/// A control that can be shown, hidden and optionally laid out.
pub trait Control {
    /// Show or hide the control, including any companion controls.
    fn set_visible(&mut self, show: bool);

    /// Layout capability, for controls that declare constraints.
    fn layout(&mut self) -> Option<&mut dyn Layout> {
        None
    }
}

/// Declares a control's layout constraints with respect to its owner.
pub trait Layout {
    fn apply_layout(&mut self);
}

/// A control whose content can be exchanged with a backing store.
pub trait ValueControl {
    /// Read the current value from the control.
    fn value(&self) -> Value;

    /// Display a value in the control.
    fn set_value(&mut self, value: Value);
}
