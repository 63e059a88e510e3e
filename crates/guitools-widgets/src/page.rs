//! Container pages: controls laid out on two columns, with data exchange.
//!
//! Pages are rebuilt by the host each time they are opened. The build code
//! must start with `begin_build()` (or [`ContainerPage::reset`]) before
//! creating any control or binding, so that nothing from a previous build
//! survives.

use guitools_core::{
    Control, ControlHandle, ControlRegistry, DataExchange, ExchangeResult, ModelObject, PragmaStore,
    Project, ToolPropertyStore, Value, ValueControl,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::buttons::{CheckButton, PushButton};
use crate::combo::{ComboBox, ObjectComboBox, StaticComboBox, StaticObjectComboBox, StaticRadioBox};
use crate::edit::{Edit, StaticEdit};
use crate::file_selector::{FileSelector, Fsm};
use crate::sizing::{FIELD_WIDTH, LEFT_MARGIN};

/// Controls of a page, added on two columns: labels and fields.
///
/// Fields are created with a nominal width and stretched to the page's
/// right edge by their layout constraints.
pub struct ContainerPage {
    label_width: i32,
    registry: ControlRegistry,
}

impl ContainerPage {
    /// Create a page whose first column is `label_width` wide.
    pub fn new(label_width: i32) -> Self {
        Self {
            label_width,
            registry: ControlRegistry::new(),
        }
    }

    pub fn label_width(&self) -> i32 {
        self.label_width
    }

    pub fn registry(&self) -> &ControlRegistry {
        &self.registry
    }

    fn add<C: Control + 'static>(&mut self, control: C) -> Rc<RefCell<C>> {
        let control = Rc::new(RefCell::new(control));
        self.registry.register_rc(&control);
        control
    }

    pub fn add_edit(&mut self, y: i32) -> Rc<RefCell<Edit>> {
        self.add(Edit::new(LEFT_MARGIN, y, FIELD_WIDTH))
    }

    pub fn add_static_edit(&mut self, y: i32, text: &str) -> Rc<RefCell<StaticEdit>> {
        let wl = self.label_width;
        self.add(StaticEdit::new(text, wl, LEFT_MARGIN, y, wl + FIELD_WIDTH))
    }

    pub fn add_file_selector(
        &mut self,
        y: i32,
        text: &str,
        extension: &str,
        directory: &str,
        filter: &str,
        mode: Fsm,
    ) -> Rc<RefCell<FileSelector>> {
        let wl = self.label_width;
        self.add(FileSelector::new(
            text,
            extension,
            directory,
            filter,
            mode,
            wl,
            LEFT_MARGIN,
            y,
            wl + FIELD_WIDTH,
        ))
    }

    pub fn add_check_button(&mut self, y: i32, text: &str) -> Rc<RefCell<CheckButton>> {
        self.add(CheckButton::new(text, LEFT_MARGIN, y, FIELD_WIDTH))
    }

    pub fn add_push_button(&mut self, y: i32, name: &str) -> Rc<RefCell<PushButton>> {
        self.add(PushButton::new(name, LEFT_MARGIN, y))
    }

    pub fn add_combo_box(&mut self, y: i32) -> Rc<RefCell<ComboBox>> {
        self.add(ComboBox::new(LEFT_MARGIN, y, FIELD_WIDTH))
    }

    pub fn add_static_combo_box(&mut self, y: i32, text: &str) -> Rc<RefCell<StaticComboBox>> {
        let wl = self.label_width;
        self.add(StaticComboBox::new(text, wl, LEFT_MARGIN, y, wl + FIELD_WIDTH))
    }

    pub fn add_object_combo_box<T: 'static>(
        &mut self,
        y: i32,
        label_of: fn(&T) -> String,
    ) -> Rc<RefCell<ObjectComboBox<T>>> {
        self.add(ObjectComboBox::new(LEFT_MARGIN, y, FIELD_WIDTH, label_of))
    }

    pub fn add_static_object_combo_box<T: 'static>(
        &mut self,
        y: i32,
        text: &str,
        label_of: fn(&T) -> String,
    ) -> Rc<RefCell<StaticObjectComboBox<T>>> {
        let wl = self.label_width;
        self.add(StaticObjectComboBox::new(text, wl, LEFT_MARGIN, y, wl + FIELD_WIDTH, label_of))
    }

    pub fn add_static_radio_box(
        &mut self,
        y: i32,
        text: &str,
        options: &[(&str, &str)],
    ) -> Rc<RefCell<StaticRadioBox>> {
        let wl = self.label_width;
        self.add(StaticRadioBox::new(text, options, wl, LEFT_MARGIN, y, wl + FIELD_WIDTH))
    }

    /// Add an existing control to the page's list of controls.
    pub fn add_control(&mut self, control: ControlHandle) {
        self.registry.register(control);
    }

    /// Declare the contained controls' constraints.
    pub fn layout_controls(&self) {
        self.registry.apply_layout();
    }

    /// Show or hide the contained controls.
    pub fn show_controls(&self, show: bool) {
        self.registry.set_all_visible(show);
    }

    /// Forget the controls of the previous build.
    pub fn reset(&mut self) {
        self.registry.reset();
    }
}

/// Settings page persisting its controls as tool properties of the project.
pub struct SettingsPageEx {
    container: ContainerPage,
    exchange: DataExchange,
}

impl SettingsPageEx {
    pub fn new(label_width: i32, tool: &str) -> Self {
        Self {
            container: ContainerPage::new(label_width),
            exchange: DataExchange::tool_properties(tool),
        }
    }

    /// Reset the controls and bindings. Must start every build.
    pub fn begin_build(&mut self) {
        self.container.reset();
        self.exchange.reset();
    }

    pub fn container(&mut self) -> &mut ContainerPage {
        &mut self.container
    }

    pub fn exchange(&self) -> &DataExchange {
        &self.exchange
    }

    /// Declare a property read with `getter` and displayed with `setter`.
    pub fn declare_property(
        &mut self,
        getter: impl Fn() -> Value + 'static,
        setter: impl Fn(Value) + 'static,
        name: &str,
        default: impl Into<Value>,
    ) {
        self.exchange.bind(getter, setter, name, default, None);
    }

    /// Declare a property exchanged with a control.
    pub fn bind_control<C: ValueControl + 'static>(
        &mut self,
        control: &Rc<RefCell<C>>,
        name: &str,
        default: impl Into<Value>,
    ) {
        self.exchange.bind_control(control, name, default, None);
    }

    /// Specify how controls are moved or resized.
    pub fn layout(&self) {
        self.container.layout_controls();
    }

    /// Update the page with the properties read from the project.
    pub fn display<P: Project + ?Sized>(
        &self,
        project: &mut P,
        configuration: &str,
    ) -> ExchangeResult<()> {
        let tool = self.exchange.target().name();
        let store = ToolPropertyStore::new(project, tool, configuration);
        self.exchange.pull(&store)
    }

    /// Update the project with the properties read from the page.
    ///
    /// Not called when the dialog is cancelled.
    pub fn validate<P: Project + ?Sized>(
        &self,
        project: &mut P,
        configuration: &str,
    ) -> ExchangeResult<()> {
        let tool = self.exchange.target().name();
        let mut store = ToolPropertyStore::new(project, tool, configuration);
        self.exchange.push(&mut store)
    }
}

/// Property page persisting its controls as a JSON pragma of the selected models.
///
/// The page is displayed from the first selected model and validated
/// into all of them.
pub struct PropertyPageEx<M> {
    container: ContainerPage,
    exchange: DataExchange,
    models: Vec<M>,
    selector: Option<Box<dyn Fn(&M) -> bool>>,
}

impl<M: ModelObject> PropertyPageEx<M> {
    pub fn new(label_width: i32, pragma: &str) -> Self {
        Self {
            container: ContainerPage::new(label_width),
            exchange: DataExchange::pragma(pragma),
            models: Vec::new(),
            selector: None,
        }
    }

    /// Restrict the selected objects the page applies to.
    pub fn with_selector(mut self, selector: impl Fn(&M) -> bool + 'static) -> Self {
        self.selector = Some(Box::new(selector));
        self
    }

    /// Reset the controls and bindings. Must start every build.
    pub fn begin_build(&mut self) {
        self.container.reset();
        self.exchange.reset();
    }

    pub fn container(&mut self) -> &mut ContainerPage {
        &mut self.container
    }

    pub fn exchange(&self) -> &DataExchange {
        &self.exchange
    }

    /// Declare a property exchanged with a control.
    ///
    /// A falsy control value is stored as `empty` and `empty` is stored as
    /// the default; a falsy stored value is displayed as `empty`.
    pub fn bind_control<C: ValueControl + 'static>(
        &mut self,
        control: &Rc<RefCell<C>>,
        key: &str,
        default: impl Into<Value>,
        empty: Option<&str>,
    ) {
        self.exchange
            .bind_control(control, key, default, empty.map(Value::from));
    }

    fn is_selected(&self, model: &M) -> bool {
        self.selector.as_ref().is_none_or(|select| select(model))
    }

    /// Whether the page applies to the current selection.
    pub fn is_available(&self, models: &[M]) -> bool {
        models.iter().any(|m| self.is_selected(m))
    }

    /// Declare the models the page should consider.
    pub fn set_models(&mut self, models: Vec<M>) {
        let models = models.into_iter().filter(|m| self.is_selected(m)).collect();
        self.models = models;
    }

    pub fn models(&self) -> &[M] {
        &self.models
    }

    /// Give the models back to the host.
    pub fn take_models(&mut self) -> Vec<M> {
        std::mem::take(&mut self.models)
    }

    /// Show or hide the page.
    pub fn show(&self, show: bool) {
        self.container.show_controls(show);
    }

    /// Specify how controls are moved or resized.
    pub fn layout(&self) {
        self.container.layout_controls();
    }

    /// Update the page with the properties of the first model.
    pub fn display(&mut self) -> ExchangeResult<()> {
        let id = self.exchange.target().name();
        match self.models.first_mut() {
            Some(model) => self.exchange.pull(&PragmaStore::new(model, id)),
            None => {
                log::warn!("No model to display for pragma '{}'", id);
                Ok(())
            }
        }
    }

    /// Update all the models with the properties read from the page.
    ///
    /// Every model is attempted; the first failure is returned.
    /// Not called when the dialog is cancelled.
    pub fn validate(&mut self) -> ExchangeResult<()> {
        let id = self.exchange.target().name();
        let mut first_error = None;
        for (index, model) in self.models.iter_mut().enumerate() {
            if let Err(e) = self.exchange.push(&mut PragmaStore::new(model, id)) {
                log::warn!("Failed to update pragma '{}' of model {}: {}", id, index, e);
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// The dialog was cancelled: the models keep their pragma.
    pub fn cancel(&mut self) {
        log::debug!("Property page '{}' cancelled", self.exchange.target().name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizing::{DY, TOP_MARGIN};
    use guitools_core::memory::{MemoryObject, MemoryProject};

    const TOOL: &str = "TEST_GUI_TOOLS";
    const CONF: &str = "Debug";
    const FILTER: &str = "Python files (*.py)|*.py|All Files (*.*)|*.*||";

    #[derive(Debug, Clone, PartialEq)]
    struct FileRef {
        name: String,
    }

    fn name_of(f: &FileRef) -> String {
        f.name.clone()
    }

    /// Handles kept by the settings test page.
    struct SettingsControls {
        field: Rc<RefCell<StaticEdit>>,
        file: Rc<RefCell<FileSelector>>,
        option: Rc<RefCell<CheckButton>>,
        paths: Rc<RefCell<StaticComboBox>>,
        files: Rc<RefCell<StaticObjectComboBox<FileRef>>>,
    }

    fn build_settings(page: &mut SettingsPageEx, files: &[FileRef]) -> SettingsControls {
        page.begin_build();
        let mut y = TOP_MARGIN;
        let container = page.container();
        container.add_push_button(y, "PushButton");
        y += DY;
        let field = container.add_static_edit(y, "Field");
        y += DY;
        let file = container.add_file_selector(y, "File", ".py", "", FILTER, Fsm::Open);
        y += DY;
        let option = container.add_check_button(y, "Option");
        y += DY;
        let paths = container.add_static_combo_box(y, "Paths");
        paths
            .borrow_mut()
            .combo_mut()
            .set_items(files.iter().map(name_of));
        y += DY;
        let ocb = container.add_static_object_combo_box(y, "Files", name_of);
        ocb.borrow_mut().combo_mut().set_items(files.to_vec());

        page.bind_control(&field, "FIELD", "");
        page.bind_control(&file, "FILE", "");
        page.bind_control(&option, "OPTION", false);
        page.bind_control(&paths, "PATH", "");
        let get = ocb.clone();
        let set = ocb.clone();
        page.declare_property(
            move || get.borrow().value(),
            move |name| {
                let mut ocb = set.borrow_mut();
                let combo = ocb.combo_mut();
                let file = combo
                    .items()
                    .iter()
                    .find(|f| Value::from(f.name.as_str()) == name)
                    .cloned();
                combo.set_selection(file.as_ref());
            },
            "FR",
            "",
        );

        SettingsControls { field, file, option, paths, files: ocb }
    }

    fn files() -> Vec<FileRef> {
        ["a.scade", "b.scade"]
            .into_iter()
            .map(|name| FileRef { name: name.to_string() })
            .collect()
    }

    #[test]
    fn test_settings_page_round_trip() {
        let mut project = MemoryProject::new();
        let mut page = SettingsPageEx::new(150, TOOL);

        let controls = build_settings(&mut page, &files());
        page.display(&mut project, CONF).unwrap();
        assert_eq!(controls.field.borrow().text(), "");
        assert!(!controls.option.borrow().is_checked());

        controls.field.borrow_mut().set_text("value");
        controls.file.borrow_mut().set_text("src/a.py");
        controls.option.borrow_mut().set_checked(true);
        controls.paths.borrow_mut().combo_mut().select(1);
        controls.files.borrow_mut().combo_mut().select_label("a.scade");
        page.validate(&mut project, CONF).unwrap();

        assert_eq!(project.property(TOOL, "FIELD", CONF), Some("value"));
        assert_eq!(project.property(TOOL, "OPTION", CONF), Some("true"));
        assert_eq!(project.property(TOOL, "PATH", CONF), Some("b.scade"));
        assert_eq!(project.property(TOOL, "FR", CONF), Some("a.scade"));

        let controls = build_settings(&mut page, &files());
        page.display(&mut project, CONF).unwrap();
        assert_eq!(controls.file.borrow().text(), "src/a.py");
        assert!(controls.option.borrow().is_checked());
        assert_eq!(
            controls.files.borrow().combo().selection().map(|f| f.name.as_str()),
            Some("a.scade")
        );
    }

    #[test]
    fn test_rebuild_replaces_controls_and_bindings() {
        let mut page = SettingsPageEx::new(150, TOOL);
        build_settings(&mut page, &files());
        build_settings(&mut page, &files());

        assert_eq!(page.container().registry().len(), 6);
        assert_eq!(page.exchange().len(), 5);
    }

    #[test]
    fn test_layout_and_show() {
        let mut page = SettingsPageEx::new(150, TOOL);
        let controls = build_settings(&mut page, &files());

        page.layout();
        page.container().show_controls(false);

        let file = controls.file.borrow();
        assert!(file.dots().frame().constraints().len() == 2);
        assert!(!file.dots().frame().is_visible());
        assert!(!controls.field.borrow().label().frame().is_visible());
    }

    /// Handles kept by the pragma test page.
    struct PragmaControls {
        target: Rc<RefCell<StaticEdit>>,
        sync: Rc<RefCell<CheckButton>>,
        color: Rc<RefCell<StaticRadioBox>>,
    }

    fn build_pragma(page: &mut PropertyPageEx<MemoryObject>) -> PragmaControls {
        page.begin_build();
        let mut y = TOP_MARGIN;
        let container = page.container();
        let target = container.add_static_edit(y, "&Target name:");
        y += DY;
        let id = container.add_static_edit(y, "&Id:");
        y += DY;
        let sync = container.add_check_button(y, "&Synchronize:");
        y += DY;
        let color = container.add_static_radio_box(
            y,
            "&Color",
            &[("blue", "&Blue"), ("white", "&White"), ("red", "&Red")],
        );

        page.bind_control(&target, "target", "", Some("<target name>"));
        page.bind_control(&id, "id", "9", None);
        page.bind_control(&sync, "sync", false, None);
        page.bind_control(&color, "color", "blue", None);
        PragmaControls { target, sync, color }
    }

    #[test]
    fn test_property_page_writes_all_models() {
        let mut page = PropertyPageEx::new(50, "test_guitools");
        let controls = build_pragma(&mut page);
        page.set_models(vec![MemoryObject::new(), MemoryObject::new()]);

        page.display().unwrap();
        assert_eq!(controls.target.borrow().text(), "<target name>");
        assert_eq!(controls.color.borrow().radio().checked(), Some("blue"));

        controls.target.borrow_mut().set_text("Foo");
        controls.sync.borrow_mut().set_checked(true);
        page.validate().unwrap();

        for model in page.models() {
            assert_eq!(
                model.pragma_text("test_guitools").as_deref(),
                Some(r#"{"sync": true, "target": "Foo"}"#)
            );
        }
    }

    #[test]
    fn test_property_page_validate_overwrites_every_model() {
        let mut page = PropertyPageEx::new(50, "test_guitools");
        let controls = build_pragma(&mut page);
        page.set_models(vec![
            MemoryObject::new(),
            MemoryObject::new().with_pragma("test_guitools", "{oops"),
            MemoryObject::new().with_pragma("test_guitools", r#"{"id": "3"}"#),
        ]);

        page.display().unwrap();
        controls.target.borrow_mut().set_text("Foo");
        page.validate().unwrap();

        for model in page.models() {
            assert_eq!(
                model.pragma_text("test_guitools").as_deref(),
                Some(r#"{"target": "Foo"}"#)
            );
            assert!(model.is_modified());
        }
    }

    #[test]
    fn test_property_page_cancel_keeps_pragma() {
        let mut page = PropertyPageEx::new(50, "test_guitools");
        let controls = build_pragma(&mut page);
        page.set_models(vec![MemoryObject::new().with_pragma("test_guitools", r#"{"id": "3"}"#)]);

        page.display().unwrap();
        controls.target.borrow_mut().set_text("Bar");
        page.cancel();

        let model = &page.models()[0];
        assert_eq!(model.pragma_text("test_guitools").as_deref(), Some(r#"{"id": "3"}"#));
        assert!(!model.is_modified());
    }

    #[test]
    fn test_property_page_selector() {
        let page = PropertyPageEx::<MemoryObject>::new(50, "p")
            .with_selector(|m: &MemoryObject| m.pragma_text("package").is_some());
        let package = MemoryObject::new().with_pragma("package", "");

        assert!(!page.is_available(&[MemoryObject::new()]));
        assert!(page.is_available(&[MemoryObject::new(), package]));
    }

    #[test]
    fn test_property_page_set_models_filters() {
        let mut page = PropertyPageEx::<MemoryObject>::new(50, "p")
            .with_selector(|m: &MemoryObject| m.pragma_text("package").is_some());

        page.set_models(vec![MemoryObject::new(), MemoryObject::new().with_pragma("package", "")]);

        assert_eq!(page.models().len(), 1);
    }

    #[test]
    fn test_property_page_corrupt_pragma_fails_display() {
        let mut page = PropertyPageEx::new(50, "test_guitools");
        let controls = build_pragma(&mut page);
        page.set_models(vec![MemoryObject::new().with_pragma("test_guitools", "{oops")]);

        assert!(page.display().is_err());
        assert_eq!(controls.target.borrow().text(), "");
    }
}
