//! LazyTable - an editable, paginated data table for ratatui
//!
//! The [`table`] module holds the table state machine: columns, pagination
//! reflected into a query string, row actions and the single inline edit
//! session. [`ui::table_view`] draws it. The rest is the demo application
//! built on top.

pub mod app;
pub mod config;
pub mod demo;
pub mod error;
pub mod events;
pub mod logging;
pub mod table;
pub mod tasks;
pub mod ui;
