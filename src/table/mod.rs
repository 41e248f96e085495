//! The editable data table.
//!
//! Column configuration, record access, pagination and the edit state
//! machine. Rendering lives in `crate::ui::table_view`.

mod actions;
mod cell;
mod column;
mod data_table;
pub mod date;
mod location;
mod pagination;
mod record;
mod session;

pub use actions::{PendingDelete, RowAction, RowActions};
pub use cell::{display_value, CellEditor};
pub use column::{
    ColumnDef, DateDisplay, FieldKind, SelectOption, ACTIONS_COLUMN_HEADER, ACTIONS_COLUMN_KEY,
};
pub use data_table::{
    DataTable, DataTableBuilder, PendingSave, RowView, SaveFuture, TableBody, TableEvent,
};
pub use location::{PageLocation, QueryString, PAGE_PARAM};
pub use pagination::{Pagination, DEFAULT_ITEMS_PER_PAGE};
pub use record::Record;
pub use session::{EditSession, FieldEditor, RowMode};
