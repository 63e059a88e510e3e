//! Properties stored as tool properties of a project configuration.

use super::{BackingStore, ExchangeResult};
use crate::host::Project;
use crate::value::{Value, ValueKind};

/// Backing store mapping each key to the tool property `(tool, key)`.
///
/// The accessor family is selected by the kind of the binding's default,
/// never by the live value: a binding defaulting to `false` always goes
/// through the boolean accessors. Default values are written explicitly
/// through the default-aware setters, which lets the project decide how
/// to persist them.
pub struct ToolPropertyStore<'a, P: Project + ?Sized> {
    project: &'a mut P,
    tool: String,
    configuration: String,
}

impl<'a, P: Project + ?Sized> ToolPropertyStore<'a, P> {
    /// Create a store for the properties of `tool` in `configuration`.
    pub fn new(
        project: &'a mut P,
        tool: impl Into<String>,
        configuration: impl Into<String>,
    ) -> Self {
        Self {
            project,
            tool: tool.into(),
            configuration: configuration.into(),
        }
    }

    /// Tool name.
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Configuration name.
    pub fn configuration(&self) -> &str {
        &self.configuration
    }

    fn write(&mut self, name: &str, value: Value, default: &Value) {
        match default.kind() {
            ValueKind::Bool => self.project.set_bool_tool_prop_def(
                &self.tool,
                name,
                value.as_bool(),
                default.as_bool(),
                &self.configuration,
            ),
            ValueKind::Scalar => self.project.set_scalar_tool_prop_def(
                &self.tool,
                name,
                &value.into_text(),
                default.as_str().unwrap_or_default(),
                &self.configuration,
            ),
        }
    }
}

impl<P: Project + ?Sized> BackingStore for ToolPropertyStore<'_, P> {
    fn get(&self, key: &str, default: &Value) -> ExchangeResult<Value> {
        let value = match default {
            Value::Bool(b) => Value::Bool(self.project.get_bool_tool_prop_def(
                &self.tool,
                key,
                *b,
                &self.configuration,
            )),
            Value::Text(s) => Value::Text(self.project.get_scalar_tool_prop_def(
                &self.tool,
                key,
                s,
                &self.configuration,
            )),
        };
        Ok(value)
    }

    fn set(&mut self, key: &str, value: Value, default: &Value) -> ExchangeResult<()> {
        self.write(key, value, default);
        Ok(())
    }

    fn remove(&mut self, key: &str, default: &Value) -> ExchangeResult<()> {
        self.write(key, default.clone(), default);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::DataExchange;
    use crate::memory::{Accessor, MemoryProject};
    use std::cell::RefCell;
    use std::rc::Rc;

    const TOOL: &str = "MY_TOOL";
    const CONF: &str = "Debug";

    fn field(dx: &mut DataExchange, key: &str, default: impl Into<Value>) -> Rc<RefCell<Value>> {
        let cell = Rc::new(RefCell::new(Value::default()));
        let get = cell.clone();
        let set = cell.clone();
        dx.bind(move || get.borrow().clone(), move |v| *set.borrow_mut() = v, key, default, None);
        cell
    }

    #[test]
    fn test_bool_default_uses_bool_accessors() {
        let mut dx = DataExchange::tool_properties(TOOL);
        let option = field(&mut dx, "OPTION", false);
        let mut project = MemoryProject::new();

        for checked in [true, false] {
            *option.borrow_mut() = Value::from(checked);
            dx.push(&mut ToolPropertyStore::new(&mut project, TOOL, CONF)).unwrap();
            *option.borrow_mut() = Value::from("garbage");
            dx.pull(&ToolPropertyStore::new(&mut project, TOOL, CONF)).unwrap();
            assert_eq!(*option.borrow(), Value::from(checked));
        }

        let bool_only = |a: &Accessor| matches!(a, Accessor::GetBool | Accessor::SetBool);
        assert!(project.accesses().iter().all(bool_only));
        assert_eq!(project.accesses().len(), 4);
    }

    #[test]
    fn test_bool_default_coerces_text_value() {
        let mut dx = DataExchange::tool_properties(TOOL);
        let option = field(&mut dx, "OPTION", false);
        let mut project = MemoryProject::new();

        *option.borrow_mut() = Value::from("yes");
        dx.push(&mut ToolPropertyStore::new(&mut project, TOOL, CONF)).unwrap();

        assert_eq!(project.accesses(), vec![Accessor::SetBool]);
        assert!(project.get_bool_tool_prop_def(TOOL, "OPTION", false, CONF));
    }

    #[test]
    fn test_scalar_round_trip() {
        let mut dx = DataExchange::tool_properties(TOOL);
        let path = field(&mut dx, "PATH", "");
        let mut project = MemoryProject::new();

        *path.borrow_mut() = Value::from("out/model.py");
        dx.push(&mut ToolPropertyStore::new(&mut project, TOOL, CONF)).unwrap();
        *path.borrow_mut() = Value::from("");
        dx.pull(&ToolPropertyStore::new(&mut project, TOOL, CONF)).unwrap();

        assert_eq!(*path.borrow(), Value::from("out/model.py"));
        assert_eq!(project.accesses(), vec![Accessor::SetScalar, Accessor::GetScalar]);
    }

    #[test]
    fn test_default_written_explicitly() {
        let mut dx = DataExchange::tool_properties(TOOL);
        let field_value = field(&mut dx, "FIELD", "abc");
        let mut project = MemoryProject::new();
        project.set_scalar_tool_prop_def(TOOL, "FIELD", "xyz", "abc", CONF);
        project.clear_accesses();

        *field_value.borrow_mut() = Value::from("abc");
        dx.push(&mut ToolPropertyStore::new(&mut project, TOOL, CONF)).unwrap();

        assert_eq!(project.accesses(), vec![Accessor::SetScalar]);
        assert!(project.property(TOOL, "FIELD", CONF).is_none());
    }

    #[test]
    fn test_configurations_are_independent() {
        let mut dx = DataExchange::tool_properties(TOOL);
        let level = field(&mut dx, "LEVEL", "1");
        let mut project = MemoryProject::new();

        *level.borrow_mut() = Value::from("3");
        dx.push(&mut ToolPropertyStore::new(&mut project, TOOL, "Release")).unwrap();
        dx.pull(&ToolPropertyStore::new(&mut project, TOOL, CONF)).unwrap();

        assert_eq!(*level.borrow(), Value::from("1"));
    }
}
