//! Demo entry point (native).

#[cfg(feature = "native")]
use clap::Parser;

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting guitools demo");

    let config = guitools_app::DemoConfig::parse();
    if let Err(e) = run(&config) {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "native")]
fn run(config: &guitools_app::DemoConfig) -> guitools_core::ExchangeResult<()> {
    use guitools_app::{NativeFileDialog, SETTINGS_NAMESPACE};
    use guitools_core::FileSettings;
    use guitools_core::memory::MemoryObject;

    let mut object = MemoryObject::new();
    let pragma = guitools_app::run_pragma_session(&mut object)?;

    let mut settings = match &config.settings_dir {
        Some(dir) => FileSettings::open(dir, SETTINGS_NAMESPACE)?,
        None => FileSettings::default_location(SETTINGS_NAMESPACE)?,
    };
    let dialog = NativeFileDialog;
    let browse: Option<&dyn guitools_core::FileDialog> =
        if config.browse { Some(&dialog) } else { None };
    let validated = guitools_app::run_settings_session(&mut settings, browse)?;

    let summary = serde_json::json!({
        "pragma": pragma,
        "settings": settings.path(),
        "validated": validated,
    });
    let summary = serde_json::to_string_pretty(&summary)
        .map_err(|e| guitools_core::ExchangeError::Serialization(e.to_string()))?;
    println!("{}", summary);
    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
