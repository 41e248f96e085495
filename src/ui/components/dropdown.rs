//! Dropdown editor for select cells.
//!
//! This module provides the select-cell editor that:
//! - Shows the selected option's label (or a placeholder) when collapsed
//! - Expands to show all options when Enter is pressed
//! - Supports j/k and arrow key navigation while expanded
//! - Cycles options with h/l or Left/Right while collapsed
//! - Reports the chosen option's value, never its label

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::table::SelectOption;
use crate::ui::theme::theme;

/// Placeholder shown when no option matches the current value.
pub const SELECT_PLACEHOLDER: &str = "Select an option";

/// Most options shown at once in the expanded list.
const MAX_VISIBLE_OPTIONS: usize = 8;

/// Action resulting from dropdown input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownAction {
    /// An option was chosen; carries its value.
    Select(String),
    /// The expanded list was closed without choosing.
    Cancel,
}

/// Select editor over a fixed option list.
#[derive(Debug, Clone)]
pub struct Dropdown {
    /// Available options.
    options: Vec<SelectOption>,
    /// Index of the selected option.
    selected: Option<usize>,
    /// Index highlighted in the expanded list.
    highlighted: usize,
    /// Whether the list is expanded.
    expanded: bool,
    /// Text shown when nothing is selected.
    placeholder: String,
}

impl Dropdown {
    /// Create a dropdown over `options`, selecting the one whose value is
    /// `value` if any.
    pub fn new(options: Vec<SelectOption>, value: &str) -> Self {
        let selected = options.iter().position(|opt| opt.value == value);
        Self {
            options,
            selected,
            highlighted: selected.unwrap_or(0),
            expanded: false,
            placeholder: SELECT_PLACEHOLDER.to_string(),
        }
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Get the options.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Get the selected option.
    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.selected.and_then(|idx| self.options.get(idx))
    }

    /// Get the selected value.
    pub fn selected_value(&self) -> Option<&str> {
        self.selected_option().map(|opt| opt.value.as_str())
    }

    /// Text shown in the collapsed state.
    pub fn display_text(&self) -> &str {
        self.selected_option()
            .map(|opt| opt.label.as_str())
            .unwrap_or(&self.placeholder)
    }

    /// Check if the list is expanded.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Expand the list, highlighting the selected option.
    pub fn expand(&mut self) {
        if !self.options.is_empty() {
            self.expanded = true;
            self.highlighted = self.selected.unwrap_or(0);
        }
    }

    /// Collapse the list.
    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<DropdownAction> {
        if self.expanded {
            self.handle_expanded_input(key)
        } else {
            self.handle_collapsed_input(key)
        }
    }

    fn handle_collapsed_input(&mut self, key: KeyEvent) -> Option<DropdownAction> {
        if self.options.is_empty() {
            return None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Enter, KeyModifiers::NONE) | (KeyCode::Char(' '), KeyModifiers::NONE) => {
                self.expand();
                None
            }
            (KeyCode::Left, KeyModifiers::NONE) | (KeyCode::Char('h'), KeyModifiers::NONE) => {
                match self.selected {
                    Some(idx) if idx > 0 => self.choose(idx - 1),
                    _ => None,
                }
            }
            (KeyCode::Right, KeyModifiers::NONE) | (KeyCode::Char('l'), KeyModifiers::NONE) => {
                match self.selected {
                    None => self.choose(0),
                    Some(idx) if idx + 1 < self.options.len() => self.choose(idx + 1),
                    Some(_) => None,
                }
            }
            _ => None,
        }
    }

    fn handle_expanded_input(&mut self, key: KeyEvent) -> Option<DropdownAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                if self.highlighted + 1 < self.options.len() {
                    self.highlighted += 1;
                }
                None
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.highlighted = self.highlighted.saturating_sub(1);
                None
            }
            (KeyCode::Enter, KeyModifiers::NONE) => {
                self.expanded = false;
                self.choose(self.highlighted)
            }
            (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => {
                self.expanded = false;
                Some(DropdownAction::Cancel)
            }
            _ => None,
        }
    }

    fn choose(&mut self, idx: usize) -> Option<DropdownAction> {
        let value = self.options.get(idx)?.value.clone();
        self.selected = Some(idx);
        self.highlighted = idx;
        Some(DropdownAction::Select(value))
    }

    /// Render the collapsed dropdown inline (e.g. inside a table cell).
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let t = theme();

        let mut style = if self.selected.is_some() {
            Style::default().fg(t.input_fg)
        } else {
            Style::default().fg(t.input_placeholder)
        };
        if focused {
            style = style.fg(t.accent).add_modifier(Modifier::UNDERLINED);
        }

        let indicator = if self.expanded { "▲" } else { "▼" };
        let text = format!("{} {}", self.display_text(), indicator);
        frame.render_widget(Paragraph::new(Span::styled(text, style)), area);
    }

    /// Render the expanded option list as an overlay anchored to `anchor`.
    ///
    /// The list opens below the anchor when it fits, above otherwise.
    pub fn render_expanded_list(&self, frame: &mut Frame, anchor: Rect, screen: Rect) {
        if !self.expanded || self.options.is_empty() {
            return;
        }

        let t = theme();
        let list_height = (self.options.len().min(MAX_VISIBLE_OPTIONS) + 2) as u16;
        let width = anchor.width.max(
            self.options
                .iter()
                .map(|opt| opt.label.chars().count() as u16 + 6)
                .max()
                .unwrap_or(0),
        );
        let width = width.min(screen.width);

        let space_below = (screen.y + screen.height).saturating_sub(anchor.y + anchor.height);
        let space_above = anchor.y.saturating_sub(screen.y);

        let area = if space_below >= list_height || space_below >= space_above {
            Rect::new(
                anchor.x,
                anchor.y + anchor.height,
                width,
                list_height.min(space_below),
            )
        } else {
            let height = list_height.min(space_above);
            Rect::new(anchor.x, anchor.y - height, width, height)
        };

        frame.render_widget(Clear, area);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .enumerate()
            .map(|(idx, opt)| {
                let style = if Some(idx) == self.selected {
                    Style::default().fg(t.accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(t.fg)
                };
                ListItem::new(opt.label.clone()).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(t.border_focused))
                    .style(Style::default().bg(t.bg)),
            )
            .highlight_style(
                Style::default()
                    .fg(t.bg)
                    .bg(t.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(Some(self.highlighted));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
