//! Reusable UI components.

mod date_input;
mod dropdown;
mod help_bar;
mod input;
mod loading;
mod modal;
mod notification;

pub use date_input::DateInput;
pub use dropdown::{Dropdown, DropdownAction, SELECT_PLACEHOLDER};
pub use help_bar::{parse_hints_to_spans, render_context_help};
pub use input::TextInput;
pub use loading::{skeleton_bar, LoadingIndicator, SpinnerStyle};
pub use modal::{ConfirmAction, ConfirmDialog, ErrorDialog, DELETE_MESSAGE, DELETE_TITLE};
pub use notification::{Notification, NotificationManager, NotificationType};
