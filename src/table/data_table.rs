//! The table orchestrator.
//!
//! `DataTable` owns everything about a table that is not the data itself:
//! pagination, the cursor, the single edit session, in-flight saves and the
//! delete confirmation. Records stay with the caller and are passed in to
//! every call that needs them.

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use super::actions::{PendingDelete, RowActions};
use super::cell::{display_value, CellEditor};
use super::column::ColumnDef;
use super::date::normalize_timestamp;
use super::location::PageLocation;
use super::pagination::{Pagination, DEFAULT_ITEMS_PER_PAGE};
use super::record::Record;
use super::session::{EditSession, RowMode};
use crate::error::{FieldError, TableError};
use crate::events::KeyBindings;
use crate::ui::components::{ConfirmAction, ConfirmDialog};

/// The future returned by a row edit callback.
pub type SaveFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send>>;

type RecordCallback<R> = Box<dyn FnMut(&R)>;
type EditCallback<R> = Box<dyn Fn(R) -> SaveFuture>;
type ErrorCallback<Id> = Box<dyn FnMut(&Id, &str)>;

/// A save handed out by the table, tagged with its row.
///
/// The host runs it (usually on a background task) and reports the outcome
/// back with `DataTable::finish_save`.
pub struct PendingSave<Id> {
    id: Id,
    future: SaveFuture,
}

impl<Id> PendingSave<Id> {
    /// The id of the row being saved.
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Split into the row id and the future.
    pub fn into_parts(self) -> (Id, SaveFuture) {
        (self.id, self.future)
    }

    /// Await the save, turning its error into a display string.
    pub async fn run(self) -> (Id, Result<(), String>) {
        let result = self.future.await.map_err(|e| format!("{:#}", e));
        (self.id, result)
    }
}

impl<Id: fmt::Debug> fmt::Debug for PendingSave<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSave")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// What a key press did, for the host to act on.
#[derive(Debug)]
pub enum TableEvent<Id> {
    /// A save must be run and reported back with `finish_save`.
    SaveRequested(PendingSave<Id>),
    /// The page changed.
    PageChanged(usize),
    /// A row entered edit mode.
    EditStarted(Id),
    /// An edit was discarded.
    EditDiscarded(Id),
    /// The delete confirmation opened.
    DeleteRequested(Id),
    /// A delete was confirmed and the callback invoked.
    Deleted(Id),
    /// The delete confirmation was cancelled.
    DeleteCancelled(Id),
    /// The view callback was invoked.
    Viewed(Id),
    /// The redirect callback was invoked.
    Redirected(Id),
    /// An action was refused.
    Error(TableError),
}

/// What the table body shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody<Id> {
    /// Placeholder rows while loading.
    Skeleton {
        /// Number of placeholder rows.
        rows: usize,
        /// Number of cells per row.
        columns: usize,
    },
    /// A single "no data" row spanning every column.
    Empty {
        /// Number of columns spanned.
        colspan: usize,
    },
    /// The rows of the current page.
    Rows(Vec<RowView<Id>>),
}

/// Display data for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<Id> {
    /// Record id.
    pub id: Id,
    /// Cell text per column, actions cell included.
    pub cells: Vec<String>,
    /// Interaction mode.
    pub mode: RowMode,
}

struct Callbacks<R: Record> {
    view: Option<RecordCallback<R>>,
    redirect: Option<RecordCallback<R>>,
    delete: Option<RecordCallback<R>>,
    row_edit: Option<EditCallback<R>>,
    error: Option<ErrorCallback<R::Id>>,
}

impl<R: Record> Default for Callbacks<R> {
    fn default() -> Self {
        Self {
            view: None,
            redirect: None,
            delete: None,
            row_edit: None,
            error: None,
        }
    }
}

impl<R: Record> Callbacks<R> {
    fn actions(&self) -> RowActions {
        RowActions {
            view: self.view.is_some(),
            redirect: self.redirect.is_some(),
            delete: self.delete.is_some(),
            edit: self.row_edit.is_some(),
        }
    }

    fn report_error(&mut self, id: &R::Id, message: &str) {
        if let Some(on_error) = self.error.as_mut() {
            on_error(id, message);
        }
    }
}

/// Builder for `DataTable`.
pub struct DataTableBuilder<R: Record> {
    columns: Vec<ColumnDef>,
    items_per_page: usize,
    paginated: bool,
    vim_keys: bool,
    location: Option<Box<dyn PageLocation>>,
    callbacks: Callbacks<R>,
}

impl<R: Record> DataTableBuilder<R> {
    /// Set the page size.
    pub fn items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    /// Turn pagination on or off. Unpaginated tables show every record.
    pub fn paginated(mut self, paginated: bool) -> Self {
        self.paginated = paginated;
        self
    }

    /// Accept `h/j/k/l` as arrow keys while browsing.
    pub fn vim_keys(mut self, vim_keys: bool) -> Self {
        self.vim_keys = vim_keys;
        self
    }

    /// Reflect the page number into `location`.
    pub fn location(mut self, location: Box<dyn PageLocation>) -> Self {
        self.location = Some(location);
        self
    }

    /// Called with the row under the cursor on view.
    pub fn on_view(mut self, f: impl FnMut(&R) + 'static) -> Self {
        self.callbacks.view = Some(Box::new(f));
        self
    }

    /// Called with the row under the cursor on redirect.
    pub fn on_redirect(mut self, f: impl FnMut(&R) + 'static) -> Self {
        self.callbacks.redirect = Some(Box::new(f));
        self
    }

    /// Called once with the targeted row after a confirmed delete.
    pub fn on_delete(mut self, f: impl FnMut(&R) + 'static) -> Self {
        self.callbacks.delete = Some(Box::new(f));
        self
    }

    /// Called with the edited record on save; enables inline editing.
    pub fn on_row_edit<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(R) -> Fut + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.callbacks.row_edit = Some(Box::new(move |record| -> SaveFuture {
            Box::pin(f(record))
        }));
        self
    }

    /// Called with the row id and message when a save fails.
    pub fn on_error(mut self, f: impl FnMut(&R::Id, &str) + 'static) -> Self {
        self.callbacks.error = Some(Box::new(f));
        self
    }

    /// Build the table.
    pub fn build(self) -> DataTable<R> {
        let actions = self.callbacks.actions();
        let mut columns = self.columns;
        if actions.any() {
            columns.push(ColumnDef::actions());
        }

        let mut pagination = Pagination::new(0, self.items_per_page);
        if let Some(location) = self.location {
            pagination = pagination.with_location(location);
        }

        debug!(
            columns = columns.len(),
            items_per_page = pagination.items_per_page(),
            paginated = self.paginated,
            ?actions,
            "Table built"
        );

        DataTable {
            columns,
            actions,
            callbacks: self.callbacks,
            pagination,
            paginated: self.paginated,
            bindings: KeyBindings::new(self.vim_keys),
            loading: false,
            cursor: 0,
            session: None,
            in_flight: Vec::new(),
            confirm: None,
        }
    }
}

/// An editable, paginated table over caller-owned records.
pub struct DataTable<R: Record> {
    /// Caller columns followed by the actions column when there is one.
    columns: Vec<ColumnDef>,
    actions: RowActions,
    callbacks: Callbacks<R>,
    pagination: Pagination,
    paginated: bool,
    bindings: KeyBindings,
    loading: bool,
    /// Row index within the page slice.
    cursor: usize,
    session: Option<EditSession<R::Id>>,
    /// Rows whose save was handed out but not yet finished.
    in_flight: Vec<R::Id>,
    confirm: Option<PendingDelete<R::Id>>,
}

impl<R: Record> DataTable<R> {
    /// Start building a table over `columns`.
    pub fn builder(columns: Vec<ColumnDef>) -> DataTableBuilder<R> {
        DataTableBuilder {
            columns,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            paginated: true,
            vim_keys: true,
            location: None,
            callbacks: Callbacks::default(),
        }
    }

    /// Reconcile with the current collection.
    ///
    /// Call whenever the records may have changed.
    pub fn sync(&mut self, records: &[R]) {
        self.pagination.set_total_items(records.len());
        if self.paginated && !self.loading && self.pagination.sync_from_location() {
            debug!(page = self.pagination.current_page(), "Page followed location");
            self.cursor = 0;
        }

        let present = |id: &R::Id| records.iter().any(|r| &r.id() == id);

        if let Some(session) = &self.session {
            if !present(session.target()) {
                debug!(target = ?session.target(), "Edited row is gone, dropping session");
                self.session = None;
            }
        }
        if let Some(pending) = &self.confirm {
            if !present(&pending.target) {
                debug!(target = ?pending.target, "Row to delete is gone, closing confirmation");
                self.confirm = None;
            }
        }

        self.clamp_cursor(records);
    }

    /// All columns, the synthesized actions column last.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// The available row actions.
    pub fn actions(&self) -> RowActions {
        self.actions
    }

    /// The pagination state.
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Whether the table paginates.
    pub fn is_paginated(&self) -> bool {
        self.paginated
    }

    /// The records shown on the current page.
    pub fn page_slice<'a>(&self, records: &'a [R]) -> &'a [R] {
        if !self.paginated {
            return records;
        }
        let range = self.pagination.page_range();
        let end = range.end.min(records.len());
        let start = range.start.min(end);
        &records[start..end]
    }

    /// What the body shows right now.
    pub fn body(&self, records: &[R]) -> TableBody<R::Id> {
        if self.loading {
            return TableBody::Skeleton {
                rows: self.pagination.items_per_page(),
                columns: self.columns.len(),
            };
        }

        let slice = self.page_slice(records);
        if slice.is_empty() {
            return TableBody::Empty {
                colspan: self.columns.len(),
            };
        }

        TableBody::Rows(slice.iter().map(|record| self.row_view(record)).collect())
    }

    fn row_view(&self, record: &R) -> RowView<R::Id> {
        let id = record.id();
        let mode = self.row_mode(&id);
        let session = self.session.as_ref().filter(|s| s.is_target(&id));

        let cells = self
            .columns
            .iter()
            .map(|column| {
                if column.is_actions() {
                    return self.actions.cell_text(mode);
                }
                let value = session
                    .and_then(|s| s.pending_value(&column.key))
                    .map(str::to_string)
                    .or_else(|| record.field(&column.key))
                    .unwrap_or_default();
                display_value(&value, column)
            })
            .collect();

        RowView { id, cells, mode }
    }

    /// The mode of the row with `id`.
    pub fn row_mode(&self, id: &R::Id) -> RowMode {
        if self.in_flight.contains(id) {
            RowMode::Saving
        } else if self.session.as_ref().is_some_and(|s| s.is_target(id)) {
            RowMode::Editing
        } else {
            RowMode::Viewing
        }
    }

    /// The cursor row, within the page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor down.
    pub fn select_next(&mut self, records: &[R]) {
        let len = self.page_slice(records).len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Move the cursor up.
    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// The record under the cursor.
    pub fn selected_record<'a>(&self, records: &'a [R]) -> Option<&'a R> {
        if self.loading {
            return None;
        }
        self.page_slice(records).get(self.cursor)
    }

    fn clamp_cursor(&mut self, records: &[R]) {
        let len = self.page_slice(records).len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Go to a page. Returns the new page if it changed.
    pub fn go_to_page(&mut self, page: usize) -> Option<usize> {
        self.change_page(|p| p.go_to_page(page))
    }

    /// Go to the next page.
    pub fn next_page(&mut self) -> Option<usize> {
        self.change_page(Pagination::next_page)
    }

    /// Go to the previous page.
    pub fn prev_page(&mut self) -> Option<usize> {
        self.change_page(Pagination::prev_page)
    }

    /// Go to the first page.
    pub fn first_page(&mut self) -> Option<usize> {
        self.change_page(Pagination::first_page)
    }

    /// Go to the last page.
    pub fn last_page(&mut self) -> Option<usize> {
        self.change_page(Pagination::last_page)
    }

    /// Change the page size; the current page is re-clamped.
    pub fn set_items_per_page(&mut self, items_per_page: usize, records: &[R]) {
        self.pagination.set_items_per_page(items_per_page);
        self.clamp_cursor(records);
    }

    fn change_page(&mut self, step: impl FnOnce(&mut Pagination) -> usize) -> Option<usize> {
        if !self.paginated {
            return None;
        }
        let before = self.pagination.current_page();
        let after = step(&mut self.pagination);
        if after == before {
            return None;
        }
        debug!(from = before, to = after, "Page changed");
        self.cursor = 0;
        Some(after)
    }

    /// Invoke the view callback with the cursor row.
    pub fn view(&mut self, records: &[R]) -> Option<R::Id> {
        let record = self.selected_record(records)?;
        let on_view = self.callbacks.view.as_mut()?;
        debug!(id = ?record.id(), "View row");
        on_view(record);
        Some(record.id())
    }

    /// Invoke the redirect callback with the cursor row.
    pub fn redirect(&mut self, records: &[R]) -> Option<R::Id> {
        let record = self.selected_record(records)?;
        let on_redirect = self.callbacks.redirect.as_mut()?;
        debug!(id = ?record.id(), "Redirect row");
        on_redirect(record);
        Some(record.id())
    }

    /// Open the delete confirmation for the cursor row.
    pub fn request_delete(&mut self, records: &[R]) -> Option<R::Id> {
        if self.callbacks.delete.is_none() || self.confirm.is_some() {
            return None;
        }
        let id = self.selected_record(records)?.id();
        debug!(?id, "Delete requested");
        self.confirm = Some(PendingDelete::new(id.clone()));
        Some(id)
    }

    /// The open delete confirmation.
    pub fn confirm_dialog(&self) -> Option<&ConfirmDialog> {
        self.confirm.as_ref().map(|pending| &pending.dialog)
    }

    /// Confirm the pending delete, invoking the callback once.
    pub fn confirm_delete(&mut self, records: &[R]) -> Option<R::Id> {
        let pending = self.confirm.take()?;
        let record = records.iter().find(|r| r.id() == pending.target)?;
        let on_delete = self.callbacks.delete.as_mut()?;
        info!(id = ?pending.target, "Deleting row");
        on_delete(record);
        Some(pending.target)
    }

    /// Close the delete confirmation without deleting.
    pub fn cancel_delete(&mut self) -> Option<R::Id> {
        let pending = self.confirm.take()?;
        debug!(id = ?pending.target, "Delete cancelled");
        Some(pending.target)
    }

    /// The current edit session.
    pub fn session(&self) -> Option<&EditSession<R::Id>> {
        self.session.as_ref()
    }

    /// Whether a row is in edit mode (not saving).
    pub fn is_editing(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| !self.in_flight.contains(s.target()))
    }

    /// Put the cursor row into edit mode.
    ///
    /// Replaces any session on another row that is not saving.
    pub fn begin_edit(&mut self, records: &[R]) -> Result<R::Id, TableError> {
        if self.callbacks.row_edit.is_none() {
            return Err(TableError::NoEditCallback);
        }
        let record = self
            .selected_record(records)
            .ok_or(TableError::NoSelection)?;
        let id = record.id();

        if self.in_flight.contains(&id) {
            return Err(TableError::SaveInFlight);
        }
        if self.session.as_ref().is_some_and(|s| s.is_target(&id)) {
            return Ok(id);
        }

        if let Some(previous) = &self.session {
            // A failed save returns its row to editing, so the session stays.
            if self.in_flight.contains(previous.target()) {
                debug!(previous = ?previous.target(), ?id, "Edit refused while saving");
                return Err(TableError::SaveInFlight);
            }
            debug!(previous = ?previous.target(), "Replacing edit session");
        }
        debug!(?id, "Edit started");
        self.session = Some(EditSession::new(record, &self.columns));
        Ok(id)
    }

    /// Merge a value into the edited row's pending changes.
    ///
    /// Ignored unless `id` is being edited (not saving) and `key` is an
    /// editable column. Returns whether the value was taken.
    pub fn set_pending(&mut self, id: &R::Id, key: &str, value: &str) -> bool {
        if self.in_flight.contains(id) {
            return false;
        }
        let Some(session) = self.session.as_mut().filter(|s| s.is_target(id)) else {
            return false;
        };
        let Some(column) = self.columns.iter().find(|c| c.key == key) else {
            return false;
        };
        let Some(editor) = CellEditor::for_column(column, value) else {
            return false;
        };
        session.set_pending(key, value);
        session.replace_editor(key, editor);
        true
    }

    /// Leave edit mode without saving.
    ///
    /// Refused while the row's save is running.
    pub fn discard_edit(&mut self) -> Option<R::Id> {
        let session = self.session.as_ref()?;
        if self.in_flight.contains(session.target()) {
            return None;
        }
        let target = session.target().clone();
        debug!(id = ?target, "Edit discarded");
        self.session = None;
        Some(target)
    }

    /// Start saving the edited row.
    ///
    /// Overlays the pending changes onto a copy of the record and hands it
    /// to the edit callback exactly once. The row shows as saving until
    /// `finish_save` is called with its id.
    pub fn save(&mut self, records: &[R]) -> Result<PendingSave<R::Id>, TableError> {
        let Some(target) = self.session.as_ref().map(|s| s.target().clone()) else {
            return Err(TableError::NotEditing);
        };
        if self.callbacks.row_edit.is_none() {
            return Err(TableError::NoEditCallback);
        }
        if self.in_flight.contains(&target) {
            return Err(TableError::SaveInFlight);
        }

        let Some(original) = records.iter().find(|r| r.id() == target) else {
            debug!(id = ?target, "Edited row is gone, dropping session");
            self.session = None;
            return Err(TableError::NotEditing);
        };

        let pending = self
            .session
            .as_ref()
            .map(|s| s.pending().clone())
            .unwrap_or_default();
        let candidate = match apply_pending(&self.columns, original, &pending) {
            Ok(candidate) => candidate,
            Err(err) => {
                let message = err.to_string();
                warn!(id = ?target, error = %message, "Pending change rejected");
                if let Some(session) = self.session.as_mut() {
                    session.set_error(message.clone());
                }
                self.callbacks.report_error(&target, &message);
                return Err(err.into());
            }
        };

        let Some(on_row_edit) = self.callbacks.row_edit.as_ref() else {
            return Err(TableError::NoEditCallback);
        };
        if let Some(session) = self.session.as_mut() {
            session.clear_error();
        }
        info!(id = ?target, fields = pending.len(), "Saving row");
        let future = on_row_edit(candidate);
        self.in_flight.push(target.clone());

        Ok(PendingSave { id: target, future })
    }

    /// Report the outcome of a save.
    ///
    /// Success leaves edit mode. Failure keeps the row in edit mode with its
    /// pending changes and the error, and reports it to the error callback.
    pub fn finish_save(&mut self, id: &R::Id, result: Result<(), String>) -> Result<(), TableError> {
        self.in_flight.retain(|pending| pending != id);
        let editing = self.session.as_ref().is_some_and(|s| s.is_target(id));

        match result {
            Ok(()) => {
                info!(?id, "Row saved");
                if editing {
                    self.session = None;
                }
                Ok(())
            }
            Err(message) => {
                warn!(?id, error = %message, "Save failed");
                if let Some(session) = self.session.as_mut().filter(|_| editing) {
                    session.set_error(message.clone());
                }
                self.callbacks.report_error(id, &message);
                Err(TableError::SaveFailed(message))
            }
        }
    }

    /// Whether a save for `id` is running.
    pub fn is_saving(&self, id: &R::Id) -> bool {
        self.in_flight.contains(id)
    }

    /// Show or hide the loading skeleton.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Whether the loading skeleton is shown.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Drop all interaction state and return to page 1.
    pub fn reset(&mut self) {
        debug!("Table reset");
        self.session = None;
        self.in_flight.clear();
        self.confirm = None;
        self.cursor = 0;
        self.pagination.reset();
    }

    /// Dispatch a key press.
    pub fn handle_input(&mut self, key: KeyEvent, records: &[R]) -> Option<TableEvent<R::Id>> {
        if self.loading {
            return None;
        }

        if let Some(pending) = self.confirm.as_mut() {
            return match pending.dialog.handle_input(key)? {
                ConfirmAction::Confirm => self.confirm_delete(records).map(TableEvent::Deleted),
                ConfirmAction::Cancel => self.cancel_delete().map(TableEvent::DeleteCancelled),
            };
        }

        if self.is_editing() {
            self.handle_edit_input(key, records)
        } else {
            self.handle_view_input(key, records)
        }
    }

    fn handle_edit_input(&mut self, key: KeyEvent, records: &[R]) -> Option<TableEvent<R::Id>> {
        let session = self.session.as_mut()?;

        if session.is_capturing() {
            session.handle_editor_input(key);
            return None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('s'), KeyModifiers::CONTROL) | (KeyCode::Enter, _) => {
                Some(match self.save(records) {
                    Ok(pending) => TableEvent::SaveRequested(pending),
                    Err(err) => TableEvent::Error(err),
                })
            }
            (KeyCode::Esc, _) => self.discard_edit().map(TableEvent::EditDiscarded),
            (KeyCode::Tab, _) => {
                session.focus_next();
                None
            }
            (KeyCode::BackTab, _) => {
                session.focus_prev();
                None
            }
            _ => {
                session.handle_editor_input(key);
                None
            }
        }
    }

    fn handle_view_input(&mut self, key: KeyEvent, records: &[R]) -> Option<TableEvent<R::Id>> {
        let key = self.bindings.normalize(key);
        match (key.code, key.modifiers) {
            (KeyCode::Down, _) => {
                self.select_next(records);
                None
            }
            (KeyCode::Up, _) => {
                self.select_prev();
                None
            }
            (KeyCode::Right, _) | (KeyCode::Char('n'), KeyModifiers::NONE) => {
                self.next_page().map(TableEvent::PageChanged)
            }
            (KeyCode::Left, _) | (KeyCode::Char('p'), KeyModifiers::NONE) => {
                self.prev_page().map(TableEvent::PageChanged)
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) => {
                self.first_page().map(TableEvent::PageChanged)
            }
            (KeyCode::Char('G'), _) => self.last_page().map(TableEvent::PageChanged),
            (KeyCode::Char('v'), KeyModifiers::NONE) => self.view(records).map(TableEvent::Viewed),
            (KeyCode::Char('o'), KeyModifiers::NONE) => {
                self.redirect(records).map(TableEvent::Redirected)
            }
            (KeyCode::Char('d'), KeyModifiers::NONE) => {
                self.request_delete(records).map(TableEvent::DeleteRequested)
            }
            (KeyCode::Char('e'), KeyModifiers::NONE) => match self.begin_edit(records) {
                Ok(id) => Some(TableEvent::EditStarted(id)),
                Err(TableError::NoEditCallback | TableError::NoSelection) => None,
                Err(err) => Some(TableEvent::Error(err)),
            },
            _ => None,
        }
    }
}

/// Overlay pending values onto a copy of `original`.
///
/// Date values are rewritten in canonical timestamp form first.
fn apply_pending<R: Record>(
    columns: &[ColumnDef],
    original: &R,
    pending: &BTreeMap<String, String>,
) -> Result<R, FieldError> {
    let mut candidate = original.clone();
    for (key, value) in pending {
        let is_date = columns.iter().any(|c| &c.key == key && c.kind.is_date());
        let value = if is_date {
            normalize_timestamp(value).unwrap_or_else(|| value.clone())
        } else {
            value.clone()
        };
        candidate.set_field(key, &value)?;
    }
    Ok(candidate)
}

impl<R: Record> fmt::Debug for DataTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns.len())
            .field("actions", &self.actions)
            .field("pagination", &self.pagination)
            .field("paginated", &self.paginated)
            .field("loading", &self.loading)
            .field("cursor", &self.cursor)
            .field("editing", &self.session.as_ref().map(|s| s.target()))
            .field("in_flight", &self.in_flight)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::table::column::{DateDisplay, SelectOption};
    use crate::table::location::QueryString;
    use crate::table::record::fixtures::{rows, Row};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(table: &mut DataTable<Row>, records: &[Row], text: &str) {
        for c in text.chars() {
            table.handle_input(key(KeyCode::Char(c)), records);
        }
    }

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("name", "Name").width(20),
            ColumnDef::new("age", "Age"),
            ColumnDef::new("status", "Status").select(vec![
                SelectOption::new("Active", "123"),
                SelectOption::new("Inactive", "456"),
            ]),
            ColumnDef::new("birth_date", "Birth Date").date(DateDisplay::Date),
        ]
    }

    type Saved = Rc<RefCell<Vec<Row>>>;

    fn editable_table(records: &[Row]) -> (DataTable<Row>, Saved) {
        let saved: Saved = Rc::default();
        let sink = Rc::clone(&saved);
        let mut table = DataTable::builder(columns())
            .on_row_edit(move |row: Row| {
                sink.borrow_mut().push(row);
                async { anyhow::Ok(()) }
            })
            .build();
        table.sync(records);
        (table, saved)
    }

    fn rows_of(body: TableBody<u32>) -> Vec<RowView<u32>> {
        match body {
            TableBody::Rows(rows) => rows,
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn test_no_callbacks_no_actions_column() {
        let table: DataTable<Row> = DataTable::builder(columns()).build();
        assert!(!table.actions().any());
        assert_eq!(table.columns().len(), 4);
        assert!(table.columns().iter().all(|c| !c.is_actions()));
    }

    #[test]
    fn test_any_callback_adds_actions_column() {
        let table: DataTable<Row> = DataTable::builder(columns()).on_view(|_| {}).build();
        assert_eq!(table.columns().len(), 5);
        assert!(table.columns()[4].is_actions());
        assert_eq!(table.columns()[4].header, "Actions");
    }

    #[test]
    fn test_loading_shows_page_size_skeleton_rows() {
        let records = rows(12);
        let mut table: DataTable<Row> = DataTable::builder(columns()).items_per_page(3).build();
        table.sync(&records);
        table.set_loading(true);
        assert_eq!(
            table.body(&records),
            TableBody::Skeleton {
                rows: 3,
                columns: 4
            }
        );
        assert!(table.selected_record(&records).is_none());
    }

    #[test]
    fn test_empty_collection_shows_one_no_data_row() {
        let table: DataTable<Row> = DataTable::builder(columns()).on_delete(|_| {}).build();
        assert_eq!(table.body(&[]), TableBody::Empty { colspan: 5 });
    }

    #[test]
    fn test_body_shows_current_page() {
        let records = rows(12);
        let mut table: DataTable<Row> = DataTable::builder(columns()).build();
        table.sync(&records);
        table.last_page();

        let rows = rows_of(table.body(&records));
        let ids: Vec<u32> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![11, 12]);
        assert_eq!(rows[0].cells[0], "Person 11");
        assert_eq!(rows[0].cells[2], "Active");
        assert_eq!(rows[0].cells[3], "1993-05-15");
    }

    #[test]
    fn test_unpaginated_shows_everything() {
        let records = rows(12);
        let mut table: DataTable<Row> = DataTable::builder(columns()).paginated(false).build();
        table.sync(&records);
        assert_eq!(table.page_slice(&records).len(), 12);
        assert!(table.next_page().is_none());
    }

    #[test]
    fn test_page_navigation_keys() {
        let records = rows(12);
        let mut table: DataTable<Row> = DataTable::builder(columns()).build();
        table.sync(&records);

        assert!(matches!(
            table.handle_input(key(KeyCode::Char('l')), &records),
            Some(TableEvent::PageChanged(2))
        ));
        assert!(matches!(
            table.handle_input(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT), &records),
            Some(TableEvent::PageChanged(3))
        ));
        assert!(table.handle_input(key(KeyCode::Right), &records).is_none());
        assert!(matches!(
            table.handle_input(key(KeyCode::Char('g')), &records),
            Some(TableEvent::PageChanged(1))
        ));
        assert!(table.handle_input(key(KeyCode::Char('h')), &records).is_none());
    }

    #[test]
    fn test_cursor_moves_within_page() {
        let records = rows(7);
        let mut table: DataTable<Row> = DataTable::builder(columns()).build();
        table.sync(&records);

        for _ in 0..10 {
            table.handle_input(key(KeyCode::Char('j')), &records);
        }
        assert_eq!(table.cursor(), 4);
        assert_eq!(table.selected_record(&records).map(|r| r.id), Some(5));

        table.next_page();
        assert_eq!(table.cursor(), 0);
        assert_eq!(table.selected_record(&records).map(|r| r.id), Some(6));
        table.handle_input(key(KeyCode::Up), &records);
        assert_eq!(table.cursor(), 0);
    }

    #[test]
    fn test_cursor_clamped_when_page_shrinks() {
        let mut records = rows(5);
        let mut table: DataTable<Row> = DataTable::builder(columns()).build();
        table.sync(&records);
        for _ in 0..4 {
            table.select_next(&records);
        }
        records.truncate(2);
        table.sync(&records);
        assert_eq!(table.cursor(), 1);
    }

    #[test]
    fn test_view_and_redirect_invoke_callbacks_with_cursor_row() {
        let records = rows(3);
        let seen: Rc<RefCell<Vec<(String, u32)>>> = Rc::default();
        let view_sink = Rc::clone(&seen);
        let redirect_sink = Rc::clone(&seen);
        let mut table = DataTable::builder(columns())
            .on_view(move |row: &Row| view_sink.borrow_mut().push(("view".into(), row.id)))
            .on_redirect(move |row: &Row| {
                redirect_sink.borrow_mut().push(("redirect".into(), row.id))
            })
            .build();
        table.sync(&records);

        table.select_next(&records);
        assert!(matches!(
            table.handle_input(key(KeyCode::Char('v')), &records),
            Some(TableEvent::Viewed(2))
        ));
        assert!(matches!(
            table.handle_input(key(KeyCode::Char('o')), &records),
            Some(TableEvent::Redirected(2))
        ));
        assert_eq!(
            *seen.borrow(),
            vec![("view".to_string(), 2), ("redirect".to_string(), 2)]
        );
    }

    #[test]
    fn test_missing_callback_is_noop() {
        let records = rows(3);
        let mut table: DataTable<Row> = DataTable::builder(columns()).build();
        table.sync(&records);
        assert!(table.view(&records).is_none());
        assert!(table.request_delete(&records).is_none());
        assert!(table.handle_input(key(KeyCode::Char('e')), &records).is_none());
        assert_eq!(table.begin_edit(&records), Err(TableError::NoEditCallback));
    }

    #[test]
    fn test_delete_cancel_invokes_nothing() {
        let records = rows(3);
        let deleted: Rc<RefCell<Vec<u32>>> = Rc::default();
        let sink = Rc::clone(&deleted);
        let mut table = DataTable::builder(columns())
            .on_delete(move |row: &Row| sink.borrow_mut().push(row.id))
            .build();
        table.sync(&records);

        for cancel in [KeyCode::Char('n'), KeyCode::Esc, KeyCode::Char('q')] {
            assert!(matches!(
                table.handle_input(key(KeyCode::Char('d')), &records),
                Some(TableEvent::DeleteRequested(1))
            ));
            assert!(table.confirm_dialog().is_some());
            assert!(matches!(
                table.handle_input(key(cancel), &records),
                Some(TableEvent::DeleteCancelled(1))
            ));
            assert!(table.confirm_dialog().is_none());
        }

        // Enter with the default focus is a cancel too.
        table.handle_input(key(KeyCode::Char('d')), &records);
        table.handle_input(key(KeyCode::Enter), &records);

        assert!(deleted.borrow().is_empty());
    }

    #[test]
    fn test_delete_confirm_invokes_once_with_target() {
        let records = rows(3);
        let deleted: Rc<RefCell<Vec<u32>>> = Rc::default();
        let sink = Rc::clone(&deleted);
        let mut table = DataTable::builder(columns())
            .on_delete(move |row: &Row| sink.borrow_mut().push(row.id))
            .build();
        table.sync(&records);

        table.select_next(&records);
        table.select_next(&records);
        table.handle_input(key(KeyCode::Char('d')), &records);
        assert!(matches!(
            table.handle_input(key(KeyCode::Char('y')), &records),
            Some(TableEvent::Deleted(3))
        ));
        assert!(table.handle_input(key(KeyCode::Char('y')), &records).is_none());
        assert_eq!(*deleted.borrow(), vec![3]);
    }

    #[test]
    fn test_confirm_dialog_blocks_other_input() {
        let records = rows(12);
        let mut table = DataTable::builder(columns()).on_delete(|_: &Row| {}).build();
        table.sync(&records);

        table.handle_input(key(KeyCode::Char('d')), &records);
        assert!(table.handle_input(key(KeyCode::Char('j')), &records).is_none());
        assert!(table.handle_input(key(KeyCode::Right), &records).is_none());
        assert_eq!(table.cursor(), 0);
        assert_eq!(table.pagination().current_page(), 1);
        assert!(table.confirm_dialog().is_some());
    }

    #[test]
    fn test_enter_on_continue_confirms() {
        let records = rows(1);
        let deleted: Rc<RefCell<Vec<u32>>> = Rc::default();
        let sink = Rc::clone(&deleted);
        let mut table = DataTable::builder(columns())
            .on_delete(move |row: &Row| sink.borrow_mut().push(row.id))
            .build();
        table.sync(&records);

        table.request_delete(&records);
        table.handle_input(key(KeyCode::Tab), &records);
        table.handle_input(key(KeyCode::Enter), &records);
        assert_eq!(*deleted.borrow(), vec![1]);
    }

    #[test]
    fn test_confirmation_closes_when_row_disappears() {
        let mut records = rows(2);
        let mut table = DataTable::builder(columns()).on_delete(|_: &Row| {}).build();
        table.sync(&records);
        table.request_delete(&records);

        records.remove(0);
        table.sync(&records);
        assert!(table.confirm_dialog().is_none());
    }

    #[test]
    fn test_begin_edit_enters_editing() {
        let records = rows(3);
        let (mut table, _) = editable_table(&records);

        assert!(matches!(
            table.handle_input(key(KeyCode::Char('e')), &records),
            Some(TableEvent::EditStarted(1))
        ));
        assert!(table.is_editing());
        assert_eq!(table.row_mode(&1), RowMode::Editing);
        assert_eq!(table.row_mode(&2), RowMode::Viewing);
        assert!(table.session().is_some_and(|s| s.pending().is_empty()));
    }

    #[test]
    fn test_edit_change_discard_leaves_value_unchanged() {
        let records = rows(3);
        let (mut table, saved) = editable_table(&records);
        let before = rows_of(table.body(&records));

        table.begin_edit(&records).unwrap();
        type_text(&mut table, &records, "X");
        assert_eq!(rows_of(table.body(&records))[0].cells[0], "Person 1X");

        assert!(matches!(
            table.handle_input(key(KeyCode::Esc), &records),
            Some(TableEvent::EditDiscarded(1))
        ));
        assert!(table.session().is_none());
        assert_eq!(rows_of(table.body(&records)), before);
        assert!(saved.borrow().is_empty());
    }

    #[test]
    fn test_edit_two_fields_save_invokes_callback_once() {
        let records = rows(3);
        let (mut table, saved) = editable_table(&records);

        table.begin_edit(&records).unwrap();
        table.handle_input(ctrl('u'), &records);
        type_text(&mut table, &records, "Jane");
        table.handle_input(key(KeyCode::Tab), &records);
        table.handle_input(key(KeyCode::Backspace), &records);
        table.handle_input(key(KeyCode::Backspace), &records);
        type_text(&mut table, &records, "44");

        let event = table.handle_input(ctrl('s'), &records);
        let pending = match event {
            Some(TableEvent::SaveRequested(pending)) => pending,
            other => panic!("expected save, got {:?}", other),
        };
        assert_eq!(pending.id(), &1);
        assert_eq!(table.row_mode(&1), RowMode::Saving);

        let saved = saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name, "Jane");
        assert_eq!(saved[0].age, 44);
        assert_eq!(saved[0].status, "123");
        assert_eq!(records[0].name, "Person 1");
    }

    #[test]
    fn test_second_save_while_in_flight_is_refused() {
        let records = rows(3);
        let (mut table, saved) = editable_table(&records);

        table.begin_edit(&records).unwrap();
        let _pending = table.save(&records).unwrap();
        assert!(matches!(
            table.save(&records),
            Err(TableError::SaveInFlight)
        ));
        assert!(table.handle_input(ctrl('s'), &records).is_none());
        assert!(table.discard_edit().is_none());
        assert_eq!(saved.borrow().len(), 1);
    }

    #[test]
    fn test_successful_save_returns_to_viewing() {
        let records = rows(3);
        let (mut table, _) = editable_table(&records);

        table.begin_edit(&records).unwrap();
        let pending = table.save(&records).unwrap();
        let (id, result) = tokio_test::block_on(pending.run());
        assert_eq!(result, Ok(()));

        table.finish_save(&id, result).unwrap();
        assert_eq!(table.row_mode(&1), RowMode::Viewing);
        assert!(table.session().is_none());
    }

    #[test]
    fn test_failed_save_keeps_row_in_edit_mode() {
        let records = rows(3);
        let errors: Rc<RefCell<Vec<(u32, String)>>> = Rc::default();
        let sink = Rc::clone(&errors);
        let mut table = DataTable::builder(columns())
            .on_row_edit(|_row: Row| async { Err::<(), _>(anyhow::anyhow!("server unavailable")) })
            .on_error(move |id: &u32, msg: &str| sink.borrow_mut().push((*id, msg.to_string())))
            .build();
        table.sync(&records);

        table.begin_edit(&records).unwrap();
        type_text(&mut table, &records, "!");
        let pending = table.save(&records).unwrap();
        let (id, result) = tokio_test::block_on(pending.run());

        assert_eq!(
            table.finish_save(&id, result),
            Err(TableError::SaveFailed("server unavailable".to_string()))
        );
        assert_eq!(table.row_mode(&1), RowMode::Editing);
        let session = table.session().unwrap();
        assert_eq!(session.pending_value("name"), Some("Person 1!"));
        assert_eq!(session.error(), Some("server unavailable"));
        assert_eq!(
            *errors.borrow(),
            vec![(1, "server unavailable".to_string())]
        );

        // Retry clears the error and saves again.
        assert!(table.save(&records).is_ok());
        assert!(table.session().unwrap().error().is_none());
    }

    #[test]
    fn test_invalid_value_keeps_editing_without_callback() {
        let records = rows(3);
        let errors: Rc<RefCell<Vec<String>>> = Rc::default();
        let sink = Rc::clone(&errors);
        let saved: Saved = Rc::default();
        let saved_sink = Rc::clone(&saved);
        let mut table = DataTable::builder(columns())
            .on_row_edit(move |row: Row| {
                saved_sink.borrow_mut().push(row);
                async { anyhow::Ok(()) }
            })
            .on_error(move |_: &u32, msg: &str| sink.borrow_mut().push(msg.to_string()))
            .build();
        table.sync(&records);

        table.begin_edit(&records).unwrap();
        assert!(table.set_pending(&1, "age", "old"));
        assert!(matches!(
            table.handle_input(key(KeyCode::Enter), &records),
            Some(TableEvent::Error(TableError::Field(_)))
        ));
        assert!(saved.borrow().is_empty());
        assert_eq!(table.row_mode(&1), RowMode::Editing);
        assert!(table.session().unwrap().error().is_some());
        assert_eq!(errors.borrow().len(), 1);
    }

    #[test]
    fn test_saved_date_redisplays_as_entered() {
        let mut records = rows(1);
        let (mut table, saved) = editable_table(&records);

        table.begin_edit(&records).unwrap();
        assert!(table.set_pending(&1, "birth_date", "2024-03-01"));
        let pending = table.save(&records).unwrap();
        let (id, result) = tokio_test::block_on(pending.run());
        table.finish_save(&id, result).unwrap();

        let stored = saved.borrow()[0].clone();
        assert_eq!(stored.birth_date, "2024-03-01T00:00:00.000Z");
        records[0] = stored;
        table.sync(&records);
        assert_eq!(rows_of(table.body(&records))[0].cells[3], "2024-03-01");
    }

    #[test]
    fn test_date_editor_commit_is_canonical() {
        let records = rows(1);
        let (mut table, saved) = editable_table(&records);

        table.begin_edit(&records).unwrap();
        for _ in 0..3 {
            table.handle_input(key(KeyCode::Tab), &records);
        }
        table.handle_input(key(KeyCode::Up), &records);
        table.save(&records).unwrap();
        assert_eq!(saved.borrow()[0].birth_date, "1993-05-16T00:00:00.000Z");
    }

    #[test]
    fn test_select_commit_stores_value() {
        let records = rows(1);
        let (mut table, saved) = editable_table(&records);

        table.begin_edit(&records).unwrap();
        table.handle_input(key(KeyCode::Tab), &records);
        table.handle_input(key(KeyCode::Tab), &records);
        table.handle_input(key(KeyCode::Char(' ')), &records);
        table.handle_input(key(KeyCode::Down), &records);
        // Enter picks the option while the list is open; it does not save.
        assert!(table.handle_input(key(KeyCode::Enter), &records).is_none());
        assert_eq!(rows_of(table.body(&records))[0].cells[2], "Inactive");

        table.handle_input(key(KeyCode::Enter), &records);
        assert_eq!(saved.borrow()[0].status, "456");
    }

    #[test]
    fn test_esc_closes_dropdown_before_discarding() {
        let records = rows(1);
        let (mut table, _) = editable_table(&records);

        table.begin_edit(&records).unwrap();
        table.handle_input(key(KeyCode::Tab), &records);
        table.handle_input(key(KeyCode::Tab), &records);
        table.handle_input(key(KeyCode::Char(' ')), &records);
        assert!(table.handle_input(key(KeyCode::Esc), &records).is_none());
        assert!(table.is_editing());
        assert!(matches!(
            table.handle_input(key(KeyCode::Esc), &records),
            Some(TableEvent::EditDiscarded(1))
        ));
    }

    #[test]
    fn test_set_pending_ignores_other_rows_and_read_only_columns() {
        let records = rows(2);
        let columns = vec![
            ColumnDef::new("name", "Name").read_only(),
            ColumnDef::new("age", "Age"),
        ];
        let mut table = DataTable::builder(columns)
            .on_row_edit(|_: Row| async { anyhow::Ok(()) })
            .build();
        table.sync(&records);

        assert!(!table.set_pending(&1, "age", "50"));
        table.begin_edit(&records).unwrap();
        assert!(!table.set_pending(&2, "age", "50"));
        assert!(!table.set_pending(&1, "name", "Bob"));
        assert!(!table.set_pending(&1, "missing", "x"));
        assert!(table.set_pending(&1, "age", "50"));
        assert_eq!(table.session().unwrap().pending().len(), 1);
    }

    #[test]
    fn test_begin_edit_on_other_row_replaces_session() {
        let records = rows(3);
        let (mut table, _) = editable_table(&records);

        table.begin_edit(&records).unwrap();
        table.set_pending(&1, "age", "99");
        table.handle_input(key(KeyCode::Esc), &records);
        table.select_next(&records);
        assert_eq!(table.begin_edit(&records), Ok(2));
        assert_eq!(table.row_mode(&1), RowMode::Viewing);
        assert!(table.session().unwrap().pending().is_empty());
    }

    #[test]
    fn test_other_rows_stay_interactive_while_saving() {
        let records = rows(3);
        let (mut table, _) = editable_table(&records);

        table.begin_edit(&records).unwrap();
        let _pending = table.save(&records).unwrap();
        assert!(!table.is_editing());

        assert_eq!(table.begin_edit(&records), Err(TableError::SaveInFlight));
        table.handle_input(key(KeyCode::Char('j')), &records);
        assert_eq!(table.cursor(), 1);
        assert!(matches!(
            table.handle_input(key(KeyCode::Char('e')), &records),
            Some(TableEvent::Error(TableError::SaveInFlight))
        ));
        assert_eq!(table.row_mode(&1), RowMode::Saving);
        assert_eq!(table.row_mode(&2), RowMode::Viewing);

        table.finish_save(&1, Ok(())).unwrap();
        assert!(matches!(
            table.handle_input(key(KeyCode::Char('e')), &records),
            Some(TableEvent::EditStarted(2))
        ));
        assert_eq!(table.row_mode(&2), RowMode::Editing);
    }

    #[test]
    fn test_failed_save_keeps_changes_after_edit_elsewhere_was_refused() {
        let records = rows(3);
        let (mut table, _) = editable_table(&records);

        table.begin_edit(&records).unwrap();
        assert!(table.set_pending(&1, "name", "Renamed"));
        let _pending = table.save(&records).unwrap();

        table.select_next(&records);
        assert_eq!(table.begin_edit(&records), Err(TableError::SaveInFlight));

        let err = table.finish_save(&1, Err("timeout".to_string())).unwrap_err();
        assert_eq!(err, TableError::SaveFailed("timeout".to_string()));
        assert_eq!(table.row_mode(&1), RowMode::Editing);
        let session = table.session().unwrap();
        assert!(session.is_target(&1));
        assert_eq!(session.pending().get("name").map(String::as_str), Some("Renamed"));
        assert_eq!(session.error(), Some("timeout"));
    }

    #[test]
    fn test_session_dropped_when_row_disappears() {
        let mut records = rows(3);
        let (mut table, _) = editable_table(&records);

        table.begin_edit(&records).unwrap();
        records.remove(0);
        table.sync(&records);
        assert!(table.session().is_none());
        assert_eq!(table.save(&records).err(), Some(TableError::NotEditing));
    }

    #[test]
    fn test_location_drives_page() {
        let records = rows(30);
        let shared = Arc::new(Mutex::new(QueryString::parse("?page=3&sort=name")));
        let mut table: DataTable<Row> = DataTable::builder(columns())
            .location(Box::new(Arc::clone(&shared)))
            .build();
        table.sync(&records);
        assert_eq!(table.pagination().current_page(), 3);

        table.next_page();
        assert_eq!(shared.lock().unwrap().to_query(), "?page=4&sort=name");

        shared.lock().unwrap().set_query("?page=1");
        table.sync(&records);
        assert_eq!(table.pagination().current_page(), 1);
    }

    #[test]
    fn test_delete_shrinks_pages() {
        let mut records = rows(6);
        let mut table = DataTable::builder(columns()).on_delete(|_: &Row| {}).build();
        table.sync(&records);
        table.last_page();
        assert_eq!(table.pagination().current_page(), 2);

        records.pop();
        table.sync(&records);
        assert_eq!(table.pagination().current_page(), 1);
    }

    #[test]
    fn test_reset() {
        let records = rows(12);
        let (mut table, _) = editable_table(&records);
        table.next_page();
        table.begin_edit(&records).unwrap();
        let _pending = table.save(&records).unwrap();

        table.reset();
        assert!(table.session().is_none());
        assert!(!table.is_saving(&6));
        assert_eq!(table.pagination().current_page(), 1);
        assert_eq!(table.cursor(), 0);
    }

    #[test]
    fn test_loading_blocks_input() {
        let records = rows(12);
        let mut table: DataTable<Row> = DataTable::builder(columns()).build();
        table.sync(&records);
        table.set_loading(true);
        assert!(table.handle_input(key(KeyCode::Right), &records).is_none());
        assert_eq!(table.pagination().current_page(), 1);
    }

    #[test]
    fn test_vim_keys_off() {
        let records = rows(12);
        let mut table: DataTable<Row> = DataTable::builder(columns()).vim_keys(false).build();
        table.sync(&records);
        assert!(table.handle_input(key(KeyCode::Char('l')), &records).is_none());
        assert!(matches!(
            table.handle_input(key(KeyCode::Char('n')), &records),
            Some(TableEvent::PageChanged(2))
        ));
    }
}
