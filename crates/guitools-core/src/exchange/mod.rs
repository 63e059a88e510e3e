//! Data exchange between page controls and persisted state.
//!
//! A page declares bindings while it is built, then:
//! - on display, [`DataExchange::pull`] reads the store and fills the controls;
//! - on validate, [`DataExchange::push`] reads the controls and updates the store.
//!
//! Stores differ only in how they get, set and remove a key.

mod pragma;
mod settings;
mod tool_property;

pub use pragma::{PragmaState, PragmaStore, to_pragma_text};
pub use settings::{FileSettings, SETTINGS_EXTENSION};
pub use tool_property::ToolPropertyStore;

use crate::control::ValueControl;
use crate::value::Value;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

/// Data exchange errors.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Exchange error: {0}")]
    Other(String),
}

/// Result type for data exchange operations.
pub type ExchangeResult<T> = Result<T, ExchangeError>;

/// A key/value backing store for page properties.
pub trait BackingStore {
    /// Read `key`, or `default` when the key is absent.
    fn get(&self, key: &str, default: &Value) -> ExchangeResult<Value>;

    /// Write a value that differs from its default.
    fn set(&mut self, key: &str, value: Value, default: &Value) -> ExchangeResult<()>;

    /// Record that `key` holds its default value.
    fn remove(&mut self, key: &str, default: &Value) -> ExchangeResult<()>;

    /// Commit the writes of a push.
    fn flush(&mut self) -> ExchangeResult<()> {
        Ok(())
    }
}

/// Where the bindings of a page are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreTarget {
    /// Tool properties of a project configuration, namespaced by tool.
    ToolProperty { tool: String },
    /// A JSON object in a text pragma of the selected model objects.
    Pragma { id: String },
    /// A settings file, namespaced by tool.
    Settings { namespace: String },
}

impl StoreTarget {
    /// The tool name, pragma id or settings namespace.
    pub fn name(&self) -> &str {
        match self {
            StoreTarget::ToolProperty { tool } => tool,
            StoreTarget::Pragma { id } => id,
            StoreTarget::Settings { namespace } => namespace,
        }
    }
}

/// Reads a value from a control.
pub type Getter = Box<dyn Fn() -> Value>;

/// Displays a value in a control.
pub type Setter = Box<dyn Fn(Value)>;

/// Link between one control's accessors and one persisted key.
pub struct Binding {
    getter: Getter,
    setter: Setter,
    key: String,
    default: Value,
    empty: Option<Value>,
}

impl Binding {
    /// Persisted key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Value used when the key is absent.
    pub fn default(&self) -> &Value {
        &self.default
    }

    /// Value displayed instead of an empty one.
    pub fn empty_marker(&self) -> Option<&Value> {
        self.empty.as_ref()
    }

    /// Value to display for a stored value.
    fn displayed(&self, stored: Value) -> Value {
        match &self.empty {
            Some(empty) if stored.is_falsy() => empty.clone(),
            _ => stored,
        }
    }

    /// Value to persist for a control value, `None` meaning the default.
    fn persisted(&self, mut value: Value) -> Option<Value> {
        if let Some(empty) = &self.empty {
            if value.is_falsy() {
                value = empty.clone();
            }
            if value == *empty {
                value = self.default.clone();
            }
        }
        if value == self.default { None } else { Some(value) }
    }
}

/// Declarative two-way binding between controls and a backing store.
pub struct DataExchange {
    target: StoreTarget,
    bindings: Vec<Binding>,
}

impl DataExchange {
    /// Create an exchange persisted in `target`.
    pub fn new(target: StoreTarget) -> Self {
        Self { target, bindings: Vec::new() }
    }

    /// Exchange persisted as tool properties of a project configuration.
    pub fn tool_properties(tool: impl Into<String>) -> Self {
        Self::new(StoreTarget::ToolProperty { tool: tool.into() })
    }

    /// Exchange persisted as JSON in the text pragma `id`.
    pub fn pragma(id: impl Into<String>) -> Self {
        Self::new(StoreTarget::Pragma { id: id.into() })
    }

    /// Exchange persisted in a settings namespace.
    pub fn settings(namespace: impl Into<String>) -> Self {
        Self::new(StoreTarget::Settings { namespace: namespace.into() })
    }

    /// Get the backing store target.
    pub fn target(&self) -> &StoreTarget {
        &self.target
    }

    /// Declare a binding. Must be called while the page is built,
    /// once the control exists.
    pub fn bind(
        &mut self,
        getter: impl Fn() -> Value + 'static,
        setter: impl Fn(Value) + 'static,
        key: impl Into<String>,
        default: impl Into<Value>,
        empty: Option<Value>,
    ) {
        let key = key.into();
        if self.bindings.iter().any(|b| b.key == key) {
            log::warn!("Duplicate binding for key '{}' in {:?}", key, self.target);
        }
        self.bindings.push(Binding {
            getter: Box::new(getter),
            setter: Box::new(setter),
            key,
            default: default.into(),
            empty,
        });
    }

    /// Bind a control through its [`ValueControl`] accessors.
    pub fn bind_control<C: ValueControl + 'static>(
        &mut self,
        control: &Rc<RefCell<C>>,
        key: impl Into<String>,
        default: impl Into<Value>,
        empty: Option<Value>,
    ) {
        let get = control.clone();
        let set = control.clone();
        self.bind(
            move || get.borrow().value(),
            move |value| set.borrow_mut().set_value(value),
            key,
            default,
            empty,
        );
    }

    /// Forget all the bindings, at the start of a page build.
    pub fn reset(&mut self) {
        self.bindings.clear();
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if there are no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Keys of the bindings, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|b| b.key.as_str())
    }

    /// Iterate over the bindings in registration order.
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    /// Fill the controls with the values read from `store`.
    ///
    /// Bindings are processed in registration order, so a setter may rely
    /// on controls bound earlier being already populated.
    pub fn pull(&self, store: &dyn BackingStore) -> ExchangeResult<()> {
        log::debug!("Pulling {} bindings from {:?}", self.bindings.len(), self.target);
        for binding in &self.bindings {
            let value = store.get(&binding.key, &binding.default)?;
            (binding.setter)(binding.displayed(value));
        }
        Ok(())
    }

    /// Update `store` with the values read from the controls.
    pub fn push(&self, store: &mut dyn BackingStore) -> ExchangeResult<()> {
        log::debug!("Pushing {} bindings to {:?}", self.bindings.len(), self.target);
        for binding in &self.bindings {
            match binding.persisted((binding.getter)()) {
                Some(value) => store.set(&binding.key, value, &binding.default)?,
                None => store.remove(&binding.key, &binding.default)?,
            }
        }
        store.flush()
    }
}
