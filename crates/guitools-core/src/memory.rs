//! In-memory host implementations.
//!
//! Stand-ins for the host project, model objects and native dialogs,
//! for testing and for running pages outside of the IDE.

use crate::host::{FileDialog, ModelObject, Project};
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::path::{Path, PathBuf};

/// Accessor families of [`Project`], as recorded by [`MemoryProject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor {
    GetBool,
    SetBool,
    GetScalar,
    SetScalar,
}

/// `(configuration, tool, name)`
type PropertyKey = (String, String, String);

fn property_key(tool: &str, name: &str, configuration: &str) -> PropertyKey {
    (configuration.to_string(), tool.to_string(), name.to_string())
}

/// In-memory project holding tool properties per configuration.
///
/// Like the host, the default-aware setters drop a property whose value
/// equals the default.
#[derive(Debug, Default)]
pub struct MemoryProject {
    properties: BTreeMap<PropertyKey, String>,
    accesses: RefCell<Vec<Accessor>>,
}

impl MemoryProject {
    /// Create an empty project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text of a stored property.
    pub fn property(&self, tool: &str, name: &str, configuration: &str) -> Option<&str> {
        self.properties
            .get(&property_key(tool, name, configuration))
            .map(String::as_str)
    }

    /// Accessors called so far, in call order.
    pub fn accesses(&self) -> Vec<Accessor> {
        self.accesses.borrow().clone()
    }

    /// Forget the recorded accessor calls.
    pub fn clear_accesses(&mut self) {
        self.accesses.borrow_mut().clear();
    }

    fn store(&mut self, key: PropertyKey, value: String, default: &str) {
        if value == default {
            self.properties.remove(&key);
        } else {
            self.properties.insert(key, value);
        }
    }
}

impl Project for MemoryProject {
    fn get_bool_tool_prop_def(
        &self,
        tool: &str,
        name: &str,
        default: bool,
        configuration: &str,
    ) -> bool {
        self.accesses.borrow_mut().push(Accessor::GetBool);
        match self.property(tool, name, configuration) {
            Some("true") => true,
            Some("false") => false,
            _ => default,
        }
    }

    fn set_bool_tool_prop_def(
        &mut self,
        tool: &str,
        name: &str,
        value: bool,
        default: bool,
        configuration: &str,
    ) {
        self.accesses.borrow_mut().push(Accessor::SetBool);
        let key = property_key(tool, name, configuration);
        self.store(key, value.to_string(), &default.to_string());
    }

    fn get_scalar_tool_prop_def(
        &self,
        tool: &str,
        name: &str,
        default: &str,
        configuration: &str,
    ) -> String {
        self.accesses.borrow_mut().push(Accessor::GetScalar);
        self.property(tool, name, configuration)
            .unwrap_or(default)
            .to_string()
    }

    fn set_scalar_tool_prop_def(
        &mut self,
        tool: &str,
        name: &str,
        value: &str,
        default: &str,
        configuration: &str,
    ) {
        self.accesses.borrow_mut().push(Accessor::SetScalar);
        let key = property_key(tool, name, configuration);
        self.store(key, value.to_string(), default);
    }
}

/// In-memory model object with text pragmas and a modified flag.
#[derive(Debug, Clone, Default)]
pub struct MemoryObject {
    pragmas: BTreeMap<String, String>,
    modified: bool,
}

impl MemoryObject {
    /// Create an object without pragmas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a pragma without flagging the object as modified.
    pub fn with_pragma(mut self, id: &str, text: &str) -> Self {
        self.pragmas.insert(id.to_string(), text.to_string());
        self
    }

    /// Check if a pragma was written or removed since the last reset.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Reset the modified flag, as saving the model does.
    pub fn clear_modified(&mut self) {
        self.modified = false;
    }
}

impl ModelObject for MemoryObject {
    fn pragma_text(&self, id: &str) -> Option<String> {
        self.pragmas.get(id).cloned()
    }

    fn set_pragma_text(&mut self, id: &str, text: &str) {
        self.pragmas.insert(id.to_string(), text.to_string());
        self.modified = true;
    }

    fn remove_pragma_text(&mut self, id: &str) {
        if self.pragmas.remove(id).is_some() {
            self.modified = true;
        }
    }
}

/// A call received by [`ScriptedFileDialog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogCall {
    Open {
        filter: String,
        directory: PathBuf,
    },
    Save {
        name: String,
        extension: String,
        directory: PathBuf,
        filter: String,
    },
}

/// File dialog answering with queued paths.
///
/// An exhausted queue answers as if the user cancelled.
#[derive(Debug, Default)]
pub struct ScriptedFileDialog {
    answers: RefCell<VecDeque<Option<PathBuf>>>,
    calls: RefCell<Vec<DialogCall>>,
}

impl ScriptedFileDialog {
    /// Create a dialog with no queued answer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer of the next dialog, `None` for Cancel.
    pub fn answer(&self, path: Option<&str>) {
        self.answers.borrow_mut().push_back(path.map(PathBuf::from));
    }

    /// Dialogs opened so far.
    pub fn calls(&self) -> Vec<DialogCall> {
        self.calls.borrow().clone()
    }

    fn next_answer(&self) -> Option<PathBuf> {
        self.answers.borrow_mut().pop_front().flatten()
    }
}

impl FileDialog for ScriptedFileDialog {
    fn open(&self, filter: &str, directory: &Path) -> Option<PathBuf> {
        self.calls.borrow_mut().push(DialogCall::Open {
            filter: filter.to_string(),
            directory: directory.to_path_buf(),
        });
        self.next_answer()
    }

    fn save(&self, name: &str, extension: &str, directory: &Path, filter: &str) -> Option<PathBuf> {
        self.calls.borrow_mut().push(DialogCall::Save {
            name: name.to_string(),
            extension: extension.to_string(),
            directory: directory.to_path_buf(),
            filter: filter.to_string(),
        });
        self.next_answer()
    }
}
