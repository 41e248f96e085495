//! Calendar date editor for date cells.
//!
//! Edits a `YYYY-MM-DD` date. Up/Down step the date by a day.
//! Every edit that leaves a valid date behind yields the canonical
//! timestamp for it; partial input yields nothing.

use chrono::{Days, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

use super::input::TextInput;
use crate::table::date::{to_calendar_date, to_timestamp, CALENDAR_FORMAT};

/// Length of a `YYYY-MM-DD` date.
const DATE_LEN: usize = 10;

/// A date editor.
#[derive(Debug, Clone)]
pub struct DateInput {
    input: TextInput,
}

impl DateInput {
    /// Create an editor from a stored timestamp value.
    ///
    /// Values that do not parse start out empty.
    pub fn new(value: &str) -> Self {
        let mut input = TextInput::with_value(to_calendar_date(value).unwrap_or_default());
        input.set_max_len(DATE_LEN);
        input.set_placeholder("YYYY-MM-DD");
        Self { input }
    }

    /// The calendar date text currently in the editor.
    pub fn text(&self) -> &str {
        self.input.value()
    }

    /// The edited date, if the text is a valid date.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.input.value(), CALENDAR_FORMAT).ok()
    }

    /// Handle keyboard input.
    ///
    /// Returns the canonical timestamp when the edit produced a valid date.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<String> {
        let changed = match (key.code, key.modifiers) {
            (KeyCode::Up, _) => self.step(1),
            (KeyCode::Down, _) => self.step(-1),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT)
                if !(c.is_ascii_digit() || c == '-') =>
            {
                false
            }
            _ => self.input.handle_input(key),
        };

        if changed {
            to_timestamp(self.input.value())
        } else {
            None
        }
    }

    fn step(&mut self, days: i64) -> bool {
        let Some(date) = self.date() else {
            return false;
        };
        let stepped = if days >= 0 {
            date.checked_add_days(Days::new(days as u64))
        } else {
            date.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        match stepped {
            Some(next) => {
                self.input.set_value(next.format(CALENDAR_FORMAT).to_string());
                true
            }
            None => false,
        }
    }

    /// Render the editor inline.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        self.input.render(frame, area, focused);
    }
}
