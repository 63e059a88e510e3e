//! Page data exchange for IDE property and settings pages.
//!
//! Host-agnostic core: controls are registered on a page for bulk layout
//! and visibility, and bound to persisted keys for display/validate
//! round trips through tool properties, pragmas or settings files.

pub mod control;
pub mod exchange;
pub mod host;
pub mod memory;
pub mod registry;
pub mod value;

pub use control::{Control, ControlHandle, Layout, ValueControl};
pub use exchange::{
    BackingStore, Binding, DataExchange, ExchangeError, ExchangeResult, FileSettings, PragmaState,
    PragmaStore, StoreTarget, ToolPropertyStore,
};
pub use host::{FileDialog, ModelObject, Project};
pub use registry::ControlRegistry;
pub use value::{Value, ValueKind};
