//! Guitools demo application
//!
//! Runs the sample property and settings pages against in-memory and
//! file-backed hosts, with native file dialogs when enabled.

mod demo;
mod filter;

#[cfg(feature = "native")]
mod native_dialog;

pub use demo::{
    DemoConfig, PRAGMA_ID, SETTINGS_NAMESPACE, run_pragma_session, run_settings_session,
};
pub use filter::{FilterEntry, parse_filter};

#[cfg(feature = "native")]
pub use native_dialog::NativeFileDialog;
