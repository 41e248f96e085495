//! Event handling for the application.
//!
//! Terminal input is polled by `EventHandler` and turned into `Event`s that
//! drive `App::update`. Key hints per input context live in `keys`.

mod handler;
mod keys;

use crossterm::event::KeyEvent;

pub use handler::{EventHandler, TICK_RATE};
pub use keys::{get_context_hints, KeyBindings, KeyContext};

/// An application event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// No input within the tick rate.
    Tick,
    /// The application should exit.
    Quit,
}
