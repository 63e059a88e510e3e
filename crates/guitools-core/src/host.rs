//! Capabilities consumed from the host IDE.
//!
//! The project graph, model objects and native dialogs belong to the host.
//! Pages only see them through these traits, which keeps the exchange
//! logic testable with the in-memory doubles of [`crate::memory`].

use std::path::{Path, PathBuf};

/// Project accessors for configuration-scoped tool properties.
///
/// A tool property is identified by `(tool, name)` within a configuration.
/// The `_def` accessors are default-aware: getters return `default` when the
/// property is absent, setters let the host omit a value equal to `default`.
pub trait Project {
    fn get_bool_tool_prop_def(
        &self,
        tool: &str,
        name: &str,
        default: bool,
        configuration: &str,
    ) -> bool;

    fn set_bool_tool_prop_def(
        &mut self,
        tool: &str,
        name: &str,
        value: bool,
        default: bool,
        configuration: &str,
    );

    fn get_scalar_tool_prop_def(
        &self,
        tool: &str,
        name: &str,
        default: &str,
        configuration: &str,
    ) -> String;

    fn set_scalar_tool_prop_def(
        &mut self,
        tool: &str,
        name: &str,
        value: &str,
        default: &str,
        configuration: &str,
    );
}

/// Text pragmas attached to a model object.
pub trait ModelObject {
    /// Text of the pragma `id`, if the object has one.
    fn pragma_text(&self, id: &str) -> Option<String>;

    /// Create or update the pragma `id`. The host flags the object as modified.
    fn set_pragma_text(&mut self, id: &str, text: &str);

    /// Remove the pragma `id`, if any.
    fn remove_pragma_text(&mut self, id: &str);
}

/// Native file selection dialogs.
///
/// `filter` uses the host syntax `"Description (*.ext)|*.ext|...||"`.
/// Both functions block until the user closes the dialog and return `None`
/// when the dialog is cancelled.
pub trait FileDialog {
    fn open(&self, filter: &str, directory: &Path) -> Option<PathBuf>;

    fn save(&self, name: &str, extension: &str, directory: &Path, filter: &str) -> Option<PathBuf>;
}
