//! Native file dialogs.

use guitools_core::FileDialog;
use std::path::{Path, PathBuf};

use crate::filter::parse_filter;

/// [`FileDialog`] backed by the platform's native dialogs.
#[derive(Debug, Default)]
pub struct NativeFileDialog;

impl NativeFileDialog {
    fn dialog(filter: &str, directory: &Path) -> rfd::FileDialog {
        let mut dialog = rfd::FileDialog::new().set_directory(directory);
        for entry in parse_filter(filter) {
            dialog = dialog.add_filter(entry.description, entry.extensions.as_slice());
        }
        dialog
    }
}

impl FileDialog for NativeFileDialog {
    fn open(&self, filter: &str, directory: &Path) -> Option<PathBuf> {
        let path = Self::dialog(filter, directory).set_title("Open").pick_file();
        log::debug!("Open dialog returned {:?}", path);
        path
    }

    fn save(&self, name: &str, extension: &str, directory: &Path, filter: &str) -> Option<PathBuf> {
        let path = Self::dialog(filter, directory)
            .set_title("Save As")
            .set_file_name(name)
            .save_file()?;
        log::debug!("Save dialog returned {:?}", path);
        // the native dialog has no default extension
        let extension = extension.trim_start_matches('.');
        if path.extension().is_none() && !extension.is_empty() {
            Some(path.with_extension(extension))
        } else {
            Some(path)
        }
    }
}
