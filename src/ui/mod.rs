//! User interface components and views.
//!
//! This module contains all TUI rendering logic: the table view and the
//! reusable components it and the demo app are drawn with.

pub mod components;
pub mod table_view;
pub mod theme;

pub use components::{
    render_context_help, ConfirmDialog, ErrorDialog, LoadingIndicator, Notification,
    NotificationManager,
};
pub use table_view::{column_areas, page_caption, render_table};
pub use theme::{init_theme, load_theme, theme};
