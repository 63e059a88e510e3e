//! Ordered list of the controls placed on one page.

use crate::control::{Control, ControlHandle};
use std::cell::RefCell;
use std::rc::Rc;

/// Tracks the controls of a page for bulk layout and visibility.
///
/// The list is rebuilt from scratch on every page build: call [`reset`]
/// before registering the controls of a new build so that controls of a
/// previous build never receive layout or visibility requests.
///
/// [`reset`]: ControlRegistry::reset
#[derive(Default)]
pub struct ControlRegistry {
    controls: Vec<ControlHandle>,
}

impl ControlRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a control. Duplicates are not detected.
    pub fn register(&mut self, control: ControlHandle) {
        self.controls.push(control);
    }

    /// Append a typed control, keeping the caller's typed handle usable.
    pub fn register_rc<C: Control + 'static>(&mut self, control: &Rc<RefCell<C>>) {
        let handle: ControlHandle = control.clone();
        self.register(handle);
    }

    /// Forget all the controls.
    pub fn reset(&mut self) {
        log::debug!("Resetting control registry ({} controls)", self.controls.len());
        self.controls.clear();
    }

    /// Declare the constraints of the controls that support layout.
    pub fn apply_layout(&self) {
        for control in &self.controls {
            let mut control = control.borrow_mut();
            if let Some(layout) = control.layout() {
                layout.apply_layout();
            }
        }
    }

    /// Show or hide all the controls, in registration order.
    pub fn set_all_visible(&self, show: bool) {
        for control in &self.controls {
            control.borrow_mut().set_visible(show);
        }
    }

    /// Number of registered controls.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Check if no control is registered.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Iterate over the controls in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ControlHandle> {
        self.controls.iter()
    }
}
