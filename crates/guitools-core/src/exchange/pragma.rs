//! Properties stored as a JSON object in a text pragma.

use super::{BackingStore, ExchangeError, ExchangeResult};
use crate::host::ModelObject;
use crate::value::Value;
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;
use std::io;

/// Persistence state of the pragma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PragmaState {
    NoPragma,
    HasPragma(String),
}

/// Backing store holding all the properties of a page in one text pragma.
///
/// Only the values that differ from their default are persisted, and
/// the pragma is removed once no such value remains. The pragma text is
/// rewritten only when its content changes, so that validating an
/// unchanged page does not flag the model object as modified.
pub struct PragmaStore<'a, O: ModelObject + ?Sized> {
    object: &'a mut O,
    id: String,
    pending: BTreeMap<String, Value>,
}

impl<'a, O: ModelObject + ?Sized> PragmaStore<'a, O> {
    /// Create a store for the pragma `id` of `object`.
    pub fn new(object: &'a mut O, id: impl Into<String>) -> Self {
        Self {
            object,
            id: id.into(),
            pending: BTreeMap::new(),
        }
    }

    /// Pragma id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current state of the pragma on the object.
    pub fn state(&self) -> PragmaState {
        match self.object.pragma_text(&self.id) {
            Some(text) if !text.is_empty() => PragmaState::HasPragma(text),
            _ => PragmaState::NoPragma,
        }
    }

    /// Parse the pragma. An absent or empty pragma is an empty mapping.
    ///
    /// The text must be a JSON object. Fields other than booleans and
    /// strings are read as text, `null` as the empty string.
    pub fn properties(&self) -> ExchangeResult<BTreeMap<String, Value>> {
        let PragmaState::HasPragma(text) = self.state() else {
            return Ok(BTreeMap::new());
        };
        let fields: Map<String, JsonValue> = serde_json::from_str(&text)
            .map_err(|e| ExchangeError::Parse(format!("pragma '{}': {}", self.id, e)))?;
        Ok(fields
            .into_iter()
            .map(|(key, field)| (key, from_json(field)))
            .collect())
    }
}

impl<O: ModelObject + ?Sized> BackingStore for PragmaStore<'_, O> {
    fn get(&self, key: &str, default: &Value) -> ExchangeResult<Value> {
        let mut properties = self.properties()?;
        Ok(properties.remove(key).unwrap_or_else(|| default.clone()))
    }

    fn set(&mut self, key: &str, value: Value, _default: &Value) -> ExchangeResult<()> {
        self.pending.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str, _default: &Value) -> ExchangeResult<()> {
        self.pending.remove(key);
        Ok(())
    }

    fn flush(&mut self) -> ExchangeResult<()> {
        let properties = std::mem::take(&mut self.pending);
        let current = self.object.pragma_text(&self.id);

        if properties.is_empty() {
            if current.is_some() {
                log::info!("Removing pragma '{}'", self.id);
                self.object.remove_pragma_text(&self.id);
            }
            return Ok(());
        }

        let text = to_pragma_text(&properties)?;
        if current.as_deref() != Some(text.as_str()) {
            log::info!("Updating pragma '{}': {}", self.id, text);
            self.object.set_pragma_text(&self.id, &text);
        }
        Ok(())
    }
}

fn from_json(field: JsonValue) -> Value {
    match field {
        JsonValue::Bool(b) => Value::Bool(b),
        JsonValue::String(s) => Value::Text(s),
        JsonValue::Null => Value::default(),
        other => Value::Text(other.to_string()),
    }
}

/// Serialize properties in the pragma format: sorted keys, `", "` and
/// `": "` separators, no trailing newline.
pub fn to_pragma_text(properties: &BTreeMap<String, Value>) -> ExchangeResult<String> {
    let mut serializer = serde_json::Serializer::with_formatter(Vec::new(), PragmaFormatter);
    properties
        .serialize(&mut serializer)
        .map_err(|e| ExchangeError::Serialization(e.to_string()))?;
    String::from_utf8(serializer.into_inner())
        .map_err(|e| ExchangeError::Serialization(e.to_string()))
}

/// Single-line JSON with a space after separators.
struct PragmaFormatter;

impl Formatter for PragmaFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
