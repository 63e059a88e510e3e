//! Composite controls and container pages for IDE property and settings pages.
//!
//! This crate bundles the host's primitive widgets into higher-level controls:
//!
//! - **Buttons**: push buttons, check buttons
//! - **Edits**: labels, edits, static + edit bundles
//! - **Combos**: combo boxes, object combo boxes, radio groups
//! - **File selector**: static + edit + "..." button opening a native file dialog
//! - **Page**: container pages with data exchange

pub mod buttons;
pub mod combo;
pub mod edit;
pub mod file_selector;
pub mod layout;
pub mod page;
pub mod paths;

pub use buttons::{CheckButton, PushButton};
pub use combo::{
    ComboBox, ObjectComboBox, RadioBox, StaticComboBox, StaticObjectComboBox, StaticRadioBox,
};
pub use edit::{Edit, Label, StaticEdit};
pub use file_selector::{FileSelector, Fsm};
pub use layout::{Anchor, Constraint, Edge, Frame, Rect};
pub use page::{ContainerPage, PropertyPageEx, SettingsPageEx};
pub use paths::{expand_vars, expand_vars_with, relative_path};

/// Standard sizing constants used across controls, in dialog units.
pub mod sizing {
    /// Left margin of the first column
    pub const LEFT_MARGIN: i32 = 15;
    /// Right margin, between the controls and the owner's right edge
    pub const RIGHT_MARGIN: i32 = 15;
    /// Top margin of the first line
    pub const TOP_MARGIN: i32 = 7;
    /// Bottom margin
    pub const BOTTOM_MARGIN: i32 = 7;
    /// Vertical distance between two lines of controls
    pub const DY: i32 = 30;
    /// Push button width
    pub const BUTTON_WIDTH: i32 = 100;
    /// Push button height
    pub const BUTTON_HEIGHT: i32 = 23;
    /// Edit height
    pub const EDIT_HEIGHT: i32 = 20;
    /// Check button height
    pub const CHECK_BUTTON_HEIGHT: i32 = 20;
    /// Combo box height
    pub const COMBO_BOX_HEIGHT: i32 = 20;
    /// Radio button height
    pub const RADIO_BUTTON_HEIGHT: i32 = 20;
    /// Width of the "..." button of file selectors
    pub const DOTS_WIDTH: i32 = 20;
    /// Height of the "..." button of file selectors
    pub const DOTS_HEIGHT: i32 = 22;
    /// Initial width of the fields, resized by the layout constraints
    pub const FIELD_WIDTH: i32 = 100;
    /// Vertical offset of a label with respect to its field
    pub const LABEL_OFFSET: i32 = 4;
}
