//! Settings namespaces persisted as JSON files.

use super::{BackingStore, ExchangeError, ExchangeResult};
use crate::value::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of settings files.
pub const SETTINGS_EXTENSION: &str = "json";

/// File-based settings for one namespace.
///
/// Stores the non-default values of a namespace as a flat JSON object in
/// `<dir>/<namespace>.json`. The file is loaded when opened and written
/// back on [`BackingStore::flush`].
pub struct FileSettings {
    /// File holding the namespace.
    path: PathBuf,
    namespace: String,
    values: BTreeMap<String, Value>,
    dirty: bool,
}

impl FileSettings {
    /// Open the namespace stored in `dir`.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn open(dir: &Path, namespace: &str) -> ExchangeResult<Self> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| {
                ExchangeError::Io(format!("Failed to create settings directory: {}", e))
            })?;
        }
        let path = dir.join(format!("{}.{}", file_stem(namespace), SETTINGS_EXTENSION));
        let values = if path.exists() {
            let json = fs::read_to_string(&path).map_err(|e| {
                ExchangeError::Io(format!("Failed to read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&json).map_err(|e| {
                ExchangeError::Parse(format!("Failed to parse {}: {}", path.display(), e))
            })?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path,
            namespace: namespace.to_string(),
            values,
            dirty: false,
        })
    }

    /// Open the namespace in the default location.
    ///
    /// On Unix: `~/.config/guitools/settings/`
    /// On Windows: `%APPDATA%\guitools\settings\`
    pub fn default_location(namespace: &str) -> ExchangeResult<Self> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| ExchangeError::Io("Could not determine home directory".to_string()))?;

        Self::open(&base.join("guitools").join("settings"), namespace)
    }

    /// Namespace name.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Path of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if there are unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// Sanitize a namespace to be safe for filenames.
fn file_stem(namespace: &str) -> String {
    namespace
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

impl BackingStore for FileSettings {
    fn get(&self, key: &str, default: &Value) -> ExchangeResult<Value> {
        Ok(self.values.get(key).cloned().unwrap_or_else(|| default.clone()))
    }

    fn set(&mut self, key: &str, value: Value, _default: &Value) -> ExchangeResult<()> {
        if self.values.get(key) != Some(&value) {
            self.values.insert(key.to_string(), value);
            self.dirty = true;
        }
        Ok(())
    }

    fn remove(&mut self, key: &str, _default: &Value) -> ExchangeResult<()> {
        if self.values.remove(key).is_some() {
            self.dirty = true;
        }
        Ok(())
    }

    fn flush(&mut self) -> ExchangeResult<()> {
        if !self.dirty {
            return Ok(());
        }
        if self.values.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path).map_err(|e| {
                    ExchangeError::Io(format!("Failed to delete {}: {}", self.path.display(), e))
                })?;
            }
        } else {
            let json = serde_json::to_string_pretty(&self.values)
                .map_err(|e| ExchangeError::Serialization(e.to_string()))?;
            fs::write(&self.path, json).map_err(|e| {
                ExchangeError::Io(format!("Failed to write {}: {}", self.path.display(), e))
            })?;
        }
        log::info!("Saved settings '{}' to {}", self.namespace, self.path.display());
        self.dirty = false;
        Ok(())
    }
}
