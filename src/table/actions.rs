//! Per-row action controls.

use super::session::RowMode;
use crate::ui::components::ConfirmDialog;

/// One action a row can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Show the record.
    View,
    /// Navigate to the record.
    Redirect,
    /// Delete the record after confirmation.
    Delete,
    /// Edit the record inline.
    Edit,
}

impl RowAction {
    /// Label with its key in brackets.
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::View => "[v]iew",
            RowAction::Redirect => "[o]pen",
            RowAction::Delete => "[d]elete",
            RowAction::Edit => "[e]dit",
        }
    }
}

/// Which actions are available, derived from the supplied callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowActions {
    /// A view callback exists.
    pub view: bool,
    /// A redirect callback exists.
    pub redirect: bool,
    /// A delete callback exists.
    pub delete: bool,
    /// An edit callback exists.
    pub edit: bool,
}

impl RowActions {
    /// Check whether any action exists (and so the actions column).
    pub fn any(&self) -> bool {
        self.view || self.redirect || self.delete || self.edit
    }

    /// The available actions in display order.
    pub fn available(&self) -> Vec<RowAction> {
        [
            (self.view, RowAction::View),
            (self.redirect, RowAction::Redirect),
            (self.delete, RowAction::Delete),
            (self.edit, RowAction::Edit),
        ]
        .into_iter()
        .filter_map(|(on, action)| on.then_some(action))
        .collect()
    }

    /// Text of the actions cell for a row in `mode`.
    pub fn cell_text(&self, mode: RowMode) -> String {
        match mode {
            RowMode::Viewing => self
                .available()
                .iter()
                .map(RowAction::label)
                .collect::<Vec<_>>()
                .join(" "),
            RowMode::Editing => "[^s]ave [esc] discard".to_string(),
            RowMode::Saving => "saving…".to_string(),
        }
    }
}

/// A delete waiting for confirmation.
#[derive(Debug, Clone)]
pub struct PendingDelete<Id> {
    /// Record to delete.
    pub target: Id,
    /// The confirmation dialog.
    pub dialog: ConfirmDialog,
}

impl<Id> PendingDelete<Id> {
    /// Ask to confirm deleting `target`.
    pub fn new(target: Id) -> Self {
        Self {
            target,
            dialog: ConfirmDialog::delete(),
        }
    }
}
