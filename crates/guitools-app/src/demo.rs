//! Scripted page sessions run by the demo binary.

use clap::Parser;
use guitools_core::memory::MemoryObject;
use guitools_core::{DataExchange, ExchangeResult, FileDialog, FileSettings, ModelObject, Value};
use guitools_widgets::sizing::{DY, TOP_MARGIN};
use guitools_widgets::{ContainerPage, Fsm, PropertyPageEx};
use std::path::PathBuf;

/// Pragma holding the properties of the sample property page.
pub const PRAGMA_ID: &str = "test_guitools";

/// Settings namespace of the sample settings page.
pub const SETTINGS_NAMESPACE: &str = "GUITOOLS_DEMO";

const SCRIPT_FILTER: &str = "Python files (*.py)|*.py|All Files (*.*)|*.*||";

/// Run the sample property and settings pages.
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(name = "guitools-demo")]
pub struct DemoConfig {
    /// Settings directory, the default location when omitted.
    #[arg(long)]
    pub settings_dir: Option<PathBuf>,
    /// Open a native dialog to pick the script.
    #[arg(long)]
    pub browse: bool,
}

/// Display the sample property page for `object`, edit it and validate it.
///
/// Returns the resulting pragma text.
pub fn run_pragma_session(object: &mut MemoryObject) -> ExchangeResult<Option<String>> {
    let mut page = PropertyPageEx::new(50, PRAGMA_ID);
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

    page.set_models(vec![std::mem::take(object)]);
    page.layout();
    page.show(true);
    let result = page.display().and_then(|()| {
        log::info!("Displayed target '{}'", target.borrow().text());
        target.borrow_mut().set_text("Foo");
        sync.borrow_mut().set_checked(true);
        page.validate()
    });
    if let Some(model) = page.take_models().pop() {
        *object = model;
    }
    result?;
    Ok(object.pragma_text(PRAGMA_ID))
}

/// Display the sample settings page, optionally browse for a script, and validate.
///
/// A cancelled file dialog cancels the page: nothing is written.
/// Returns whether the settings were validated.
pub fn run_settings_session(
    settings: &mut FileSettings,
    dialog: Option<&dyn FileDialog>,
) -> ExchangeResult<bool> {
    let mut page = ContainerPage::new(100);
    let mut exchange = DataExchange::settings(settings.namespace());
    let mut y = TOP_MARGIN;
    let script = page.add_file_selector(y, "Script", ".py", "", SCRIPT_FILTER, Fsm::Open);
    y += DY;
    let verbose = page.add_check_button(y, "Verbose");
    exchange.bind_control(&script, "SCRIPT", "", None);
    exchange.bind_control(&verbose, "VERBOSE", false, None);

    page.layout_controls();
    exchange.pull(settings)?;

    if let Some(dialog) = dialog {
        if !script.borrow_mut().browse(dialog) {
            log::info!("Settings page cancelled");
            return Ok(false);
        }
    }
    let toggled = !verbose.borrow().is_checked();
    verbose.borrow_mut().set_checked(toggled);

    exchange.push(settings)?;
    log::info!(
        "Settings: SCRIPT={} VERBOSE={}",
        script.borrow().text(),
        Value::from(toggled)
    );
    Ok(true)
}
