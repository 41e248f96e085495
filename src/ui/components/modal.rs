//! Modal dialog components.
//!
//! `ConfirmDialog` guards destructive actions behind an explicit Continue;
//! `ErrorDialog` shows a blocking error until dismissed.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::theme;

/// Title of the delete confirmation.
pub const DELETE_TITLE: &str = "Are you sure?";

/// Body of the delete confirmation.
pub const DELETE_MESSAGE: &str =
    "This action cannot be undone. This will permanently delete the selected item.";

const CONFIRM_LABEL: &str = "Continue";
const CANCEL_LABEL: &str = "Cancel";

/// Action resulting from confirmation dialog input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// The user chose Continue.
    Confirm,
    /// The user backed out.
    Cancel,
}

/// Which button has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Button {
    Confirm,
    Cancel,
}

/// A yes/no confirmation dialog.
///
/// Focus starts on Cancel so a stray Enter never confirms.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    title: String,
    message: String,
    focus: Button,
}

impl ConfirmDialog {
    /// Create a dialog with a title and message.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            focus: Button::Cancel,
        }
    }

    /// The delete confirmation.
    pub fn delete() -> Self {
        Self::new(DELETE_TITLE, DELETE_MESSAGE)
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check whether Continue has focus.
    pub fn confirm_focused(&self) -> bool {
        self.focus == Button::Confirm
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<ConfirmAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('y'), KeyModifiers::NONE) | (KeyCode::Char('Y'), _) => {
                Some(ConfirmAction::Confirm)
            }
            (KeyCode::Char('n'), KeyModifiers::NONE)
            | (KeyCode::Char('N'), _)
            | (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Esc, _) => Some(ConfirmAction::Cancel),
            (KeyCode::Enter, _) => Some(match self.focus {
                Button::Confirm => ConfirmAction::Confirm,
                Button::Cancel => ConfirmAction::Cancel,
            }),
            (KeyCode::Left, _)
            | (KeyCode::Right, _)
            | (KeyCode::Tab, _)
            | (KeyCode::BackTab, _)
            | (KeyCode::Char('h'), KeyModifiers::NONE)
            | (KeyCode::Char('l'), KeyModifiers::NONE) => {
                self.focus = match self.focus {
                    Button::Confirm => Button::Cancel,
                    Button::Cancel => Button::Confirm,
                };
                None
            }
            _ => None,
        }
    }

    /// Render the dialog centered in `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let width = 60.min(area.width.saturating_sub(4)).max(20);
        let inner_width = width.saturating_sub(4).max(1) as usize;
        let message_lines = self.message.chars().count().div_ceil(inner_width).max(1) as u16;
        let height = message_lines + 6;
        let dialog_area = centered_rect(width, height, area);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(t.fg).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.warning))
            .style(Style::default().bg(t.bg));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let message = Paragraph::new(self.message.as_str())
            .style(Style::default().fg(t.fg))
            .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[0]);

        let button = |label: &str, focused: bool, color: Color| {
            let style = if focused {
                Style::default()
                    .fg(t.bg)
                    .bg(color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            };
            Span::styled(format!(" {} ", label), style)
        };
        let buttons = Line::from(vec![
            button(CANCEL_LABEL, self.focus == Button::Cancel, t.muted),
            Span::raw("   "),
            button(CONFIRM_LABEL, self.focus == Button::Confirm, t.error),
        ]);
        frame.render_widget(
            Paragraph::new(buttons).alignment(Alignment::Right),
            chunks[1],
        );
    }
}

/// A blocking error message.
#[derive(Debug, Clone)]
pub struct ErrorDialog {
    title: String,
    message: String,
}

impl ErrorDialog {
    /// Create an error dialog.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Get the message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true when the key dismisses the dialog.
    pub fn handle_input(&self, key: KeyEvent) -> bool {
        matches!(
            key.code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char(' ')
        )
    }

    /// Render the dialog centered in `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let width = 60.min(area.width.saturating_sub(4)).max(20);
        let dialog_area = centered_rect(width, 7, area);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.error))
            .style(Style::default().bg(t.bg));

        let text = vec![
            Line::from(Span::styled(
                self.message.as_str(),
                Style::default().fg(t.fg),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Press Enter to dismiss",
                Style::default().fg(t.muted),
            )),
        ];
        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, dialog_area);
    }
}

/// Create a centered rectangle.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
