//! Cell rendering strategies.
//!
//! A cell is either shown read-only through `display_value`, or edited
//! through a `CellEditor` chosen by the column's field kind. Editors commit
//! every change upward as soon as it happens.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use super::column::{ColumnDef, FieldKind};
use super::date::format_with;
use crate::ui::components::{DateInput, Dropdown, DropdownAction, TextInput};

/// The read-only text of a cell.
///
/// Select values show their option label and date values use the column's
/// display format. Values that match no option or do not parse as a date
/// are shown as they are.
pub fn display_value(value: &str, column: &ColumnDef) -> String {
    match &column.kind {
        FieldKind::Text => value.to_string(),
        FieldKind::Select { options } => options
            .iter()
            .find(|opt| opt.value == value)
            .map(|opt| opt.label.clone())
            .unwrap_or_else(|| value.to_string()),
        FieldKind::Date { display } => {
            format_with(value, display.pattern()).unwrap_or_else(|| value.to_string())
        }
    }
}

/// An inline editor for one cell.
#[derive(Debug, Clone)]
pub enum CellEditor {
    /// Free text.
    Text(TextInput),
    /// Option list.
    Select(Dropdown),
    /// Calendar date.
    Date(DateInput),
}

impl CellEditor {
    /// Build the editor for `column`, prefilled with `value`.
    ///
    /// Read-only columns get no editor.
    pub fn for_column(column: &ColumnDef, value: &str) -> Option<Self> {
        if !column.editable || column.is_actions() {
            return None;
        }
        let editor = match &column.kind {
            FieldKind::Text => CellEditor::Text(TextInput::with_value(value)),
            FieldKind::Select { options } => {
                CellEditor::Select(Dropdown::new(options.clone(), value))
            }
            FieldKind::Date { .. } => CellEditor::Date(DateInput::new(value)),
        };
        Some(editor)
    }

    /// Feed a key to the editor.
    ///
    /// Returns the value to commit when the key changed it.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<String> {
        match self {
            CellEditor::Text(input) => input
                .handle_input(key)
                .then(|| input.value().to_string()),
            CellEditor::Select(dropdown) => match dropdown.handle_input(key)? {
                DropdownAction::Select(value) => Some(value),
                DropdownAction::Cancel => None,
            },
            CellEditor::Date(input) => input.handle_input(key),
        }
    }

    /// Whether the editor wants every key, such as an expanded dropdown.
    pub fn is_capturing(&self) -> bool {
        matches!(self, CellEditor::Select(dropdown) if dropdown.is_expanded())
    }

    /// Close any open popup.
    pub fn collapse(&mut self) {
        if let CellEditor::Select(dropdown) = self {
            dropdown.collapse();
        }
    }

    /// Render the editor inside its cell.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        match self {
            CellEditor::Text(input) => input.render(frame, area, focused),
            CellEditor::Select(dropdown) => dropdown.render(frame, area, focused),
            CellEditor::Date(input) => input.render(frame, area, focused),
        }
    }

    /// Render popups (the expanded option list) anchored to the cell.
    pub fn render_overlay(&self, frame: &mut Frame, anchor: Rect, screen: Rect) {
        if let CellEditor::Select(dropdown) = self {
            dropdown.render_expanded_list(frame, anchor, screen);
        }
    }
}
