//! The single inline edit session.

use std::collections::BTreeMap;

use crossterm::event::KeyEvent;
use tracing::trace;

use super::cell::CellEditor;
use super::column::ColumnDef;
use super::record::Record;

/// The interaction mode of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowMode {
    /// Shown read-only.
    #[default]
    Viewing,
    /// Shown with editors.
    Editing,
    /// A save for the row is running.
    Saving,
}

/// The editor of one editable cell.
#[derive(Debug, Clone)]
pub struct FieldEditor {
    /// Index of the column in the table's column list.
    pub column: usize,
    /// Field key.
    pub key: String,
    /// The editor.
    pub editor: CellEditor,
}

/// The row being edited and its uncommitted changes.
///
/// Target and pending changes live and die together.
#[derive(Debug, Clone)]
pub struct EditSession<Id> {
    target: Id,
    pending: BTreeMap<String, String>,
    error: Option<String>,
    editors: Vec<FieldEditor>,
    focus: usize,
}

impl<Id: Clone + PartialEq> EditSession<Id> {
    /// Start editing `record` with an editor per editable column.
    pub fn new<R>(record: &R, columns: &[ColumnDef]) -> Self
    where
        R: Record<Id = Id>,
    {
        let editors = columns
            .iter()
            .enumerate()
            .filter_map(|(column, def)| {
                let value = record.field(&def.key).unwrap_or_default();
                CellEditor::for_column(def, &value).map(|editor| FieldEditor {
                    column,
                    key: def.key.clone(),
                    editor,
                })
            })
            .collect();

        Self {
            target: record.id(),
            pending: BTreeMap::new(),
            error: None,
            editors,
            focus: 0,
        }
    }

    /// The edited record's id.
    pub fn target(&self) -> &Id {
        &self.target
    }

    /// Check whether `id` is the edited record.
    pub fn is_target(&self, id: &Id) -> bool {
        &self.target == id
    }

    /// Pending field values, by key.
    pub fn pending(&self) -> &BTreeMap<String, String> {
        &self.pending
    }

    /// The pending value of a field, if it was changed.
    pub fn pending_value(&self, key: &str) -> Option<&str> {
        self.pending.get(key).map(String::as_str)
    }

    /// Merge a committed value into the pending changes.
    pub fn set_pending(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        trace!(key = %key, value = %value, "Pending change");
        self.pending.insert(key, value);
    }

    /// Replace the editor of a field, e.g. after an external value change.
    pub(crate) fn replace_editor(&mut self, key: &str, editor: CellEditor) {
        if let Some(field) = self.editors.iter_mut().find(|f| f.key == key) {
            field.editor = editor;
        }
    }

    /// The last save error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Record a save error.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    /// Clear the save error.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// The cell editors, in column order.
    pub fn editors(&self) -> &[FieldEditor] {
        &self.editors
    }

    /// The editor drawn in a column, if that column is editable.
    pub fn editor_for(&self, column: usize) -> Option<&CellEditor> {
        self.editors
            .iter()
            .find(|f| f.column == column)
            .map(|f| &f.editor)
    }

    /// Column index of the focused editor.
    pub fn focused_column(&self) -> Option<usize> {
        self.editors.get(self.focus).map(|f| f.column)
    }

    /// Move focus to the next editor, wrapping around.
    pub fn focus_next(&mut self) {
        if !self.editors.is_empty() {
            self.collapse_focused();
            self.focus = (self.focus + 1) % self.editors.len();
        }
    }

    /// Move focus to the previous editor, wrapping around.
    pub fn focus_prev(&mut self) {
        if !self.editors.is_empty() {
            self.collapse_focused();
            self.focus = (self.focus + self.editors.len() - 1) % self.editors.len();
        }
    }

    /// Whether the focused editor is holding a popup open.
    pub fn is_capturing(&self) -> bool {
        self.editors
            .get(self.focus)
            .is_some_and(|f| f.editor.is_capturing())
    }

    /// Close the focused editor's popup.
    pub fn collapse_focused(&mut self) {
        if let Some(field) = self.editors.get_mut(self.focus) {
            field.editor.collapse();
        }
    }

    /// Feed a key to the focused editor and merge any committed value.
    ///
    /// Returns the key of the field that changed.
    pub fn handle_editor_input(&mut self, key: KeyEvent) -> Option<String> {
        let field = self.editors.get_mut(self.focus)?;
        let value = field.editor.handle_input(key)?;
        let changed = field.key.clone();
        self.set_pending(changed.clone(), value);
        Some(changed)
    }
}
