//! Terminal input polling.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};

use super::Event;

/// How long `next` waits for input before yielding a tick.
///
/// Ticks drive the spinner, expire toasts and pick up finished saves, so
/// this also bounds how late a save result is shown.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Blocks on crossterm for the next `Event`.
#[derive(Debug, Clone, Copy)]
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Poll with the given tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// The tick rate.
    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Wait up to one tick for input.
    pub fn next(&self) -> std::io::Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }
        Ok(translate(event::read()?))
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(TICK_RATE)
    }
}

/// Map a crossterm event onto an app event.
///
/// Only key presses and resizes matter. Anything else counts as a tick.
fn translate(raw: CrosstermEvent) -> Event {
    match raw {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
        CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
        _ => Event::Tick,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    use super::*;

    #[test]
    fn test_default_tick_rate() {
        assert_eq!(EventHandler::default().tick_rate(), TICK_RATE);
        assert_eq!(
            EventHandler::new(Duration::from_millis(40)).tick_rate(),
            Duration::from_millis(40)
        );
    }

    #[test]
    fn test_key_press_becomes_key() {
        let press = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE);
        assert_eq!(translate(CrosstermEvent::Key(press)), Event::Key(press));
    }

    #[test]
    fn test_key_release_is_tick() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('e'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(translate(CrosstermEvent::Key(release)), Event::Tick);
    }

    #[test]
    fn test_resize_and_paste() {
        assert_eq!(translate(CrosstermEvent::Resize(80, 24)), Event::Resize(80, 24));
        assert_eq!(translate(CrosstermEvent::Paste("x".into())), Event::Tick);
        assert_eq!(translate(CrosstermEvent::FocusLost), Event::Tick);
    }
}
