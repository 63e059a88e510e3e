//! File selector: a static, an edit and a "..." button opening a file dialog.

use guitools_core::{Control, FileDialog, Layout, Value, ValueControl};
use std::path::{Path, PathBuf};

use crate::buttons::PushButton;
use crate::edit::StaticEdit;
use crate::layout::{Anchor, Edge, Rect};
use crate::paths::{expand_vars_with, relative_path};
use crate::sizing;

/// Mode of the file selector dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fsm {
    Open,
    Save,
}

/// Name of the "..." button, used as a layout anchor.
const DOTS: &str = "...";

/// Space between the edit and the "..." button.
const SEPARATOR: i32 = 5;

pub struct FileSelector {
    field: StaticEdit,
    dots: PushButton,
    extension: String,
    directory: String,
    filter: String,
    mode: Fsm,
    reference: String,
}

impl FileSelector {
    /// Create a file selector.
    ///
    /// - `extension`: default extension of the files.
    /// - `directory`: initial directory of the dialog, or the current one when empty.
    /// - `filter`: visible files, in the host syntax `"Desc (*.ext)|*.ext||"`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        text: &str,
        extension: &str,
        directory: &str,
        filter: &str,
        mode: Fsm,
        wl: i32,
        x: i32,
        y: i32,
        w: i32,
    ) -> Self {
        let field = StaticEdit::new(text, wl, x, y, w - sizing::DOTS_WIDTH - SEPARATOR);
        // so that borders are aligned
        let dots = PushButton::with_size(
            DOTS,
            Rect::new(x + w - sizing::DOTS_WIDTH, y - 1, sizing::DOTS_WIDTH, sizing::DOTS_HEIGHT),
        );
        Self {
            field,
            dots,
            extension: extension.to_string(),
            directory: directory.to_string(),
            filter: filter.to_string(),
            mode,
            reference: String::new(),
        }
    }

    /// Reference directory to resolve or compute a relative path, when not empty.
    pub fn with_reference(mut self, reference: &str) -> Self {
        self.reference = reference.to_string();
        self
    }

    pub fn set_reference(&mut self, reference: &str) {
        self.reference = reference.to_string();
    }

    pub fn set_directory(&mut self, directory: &str) {
        self.directory = directory.to_string();
    }

    pub fn mode(&self) -> Fsm {
        self.mode
    }

    pub fn field(&self) -> &StaticEdit {
        &self.field
    }

    pub fn dots(&self) -> &PushButton {
        &self.dots
    }

    pub fn text(&self) -> &str {
        self.field.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.field.set_text(text);
    }

    /// Handle a click on the "..." button, expanding environment variables.
    ///
    /// Returns whether a file was selected.
    pub fn browse(&mut self, dialog: &dyn FileDialog) -> bool {
        self.browse_with(dialog, |name| std::env::var(name).ok())
    }

    /// Handle a click on the "..." button, expanding variables with `lookup`.
    pub fn browse_with(
        &mut self,
        dialog: &dyn FileDialog,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> bool {
        let name = expand_vars_with(self.text(), &lookup);
        let mut directory = expand_vars_with(&self.directory, &lookup);
        let reference = expand_vars_with(&self.reference, &lookup);
        if directory.is_empty() && !reference.is_empty() {
            directory = reference.clone();
        }
        if directory.is_empty() {
            directory.push('.');
        }
        let directory = PathBuf::from(directory);

        let selected = match self.mode {
            Fsm::Save => dialog.save(&name, &self.extension, &directory, &self.filter),
            Fsm::Open => dialog.open(&self.filter, &directory),
        };
        let Some(path) = selected.filter(|p| !p.as_os_str().is_empty()) else {
            log::debug!("File selection cancelled");
            return false;
        };

        let path = if reference.is_empty() {
            path
        } else {
            relative_path(&path, Path::new(&reference)).unwrap_or_else(|| {
                log::debug!("No relative path from {} to {}", reference, path.display());
                path
            })
        };
        self.set_text(path.to_string_lossy());
        true
    }
}

impl Control for FileSelector {
    fn set_visible(&mut self, show: bool) {
        self.field.set_visible(show);
        self.dots.set_visible(show);
    }

    fn layout(&mut self) -> Option<&mut dyn Layout> {
        Some(self)
    }
}

impl Layout for FileSelector {
    fn apply_layout(&mut self) {
        let right = -sizing::RIGHT_MARGIN;
        let dots = self.dots.frame_mut();
        dots.set_constraint(Edge::Right, Anchor::Owner, Edge::Right, right);
        dots.set_constraint(Edge::Left, Anchor::Owner, Edge::Right, right - sizing::DOTS_WIDTH);
        self.field
            .edit_mut()
            .frame_mut()
            .set_constraint(Edge::Right, Anchor::Sibling(DOTS), Edge::Left, -SEPARATOR);
    }
}

impl ValueControl for FileSelector {
    fn value(&self) -> Value {
        self.field.value()
    }

    fn set_value(&mut self, value: Value) {
        self.field.set_value(value);
    }
}
