//! Contextual help bar component.
//!
//! Displays context-sensitive keyboard shortcut hints at the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::events::{get_context_hints, KeyContext};
use crate::ui::theme::theme;

/// Render a contextual help bar with hints for the given context.
pub fn render_context_help(frame: &mut Frame, area: Rect, context: KeyContext) {
    let hints = get_context_hints(context);
    let line = Line::from(parse_hints_to_spans(hints));
    frame.render_widget(Paragraph::new(line), area);
}

/// Parse hint text into styled spans.
///
/// Highlights the key portion (in brackets) differently from the description.
pub fn parse_hints_to_spans(hints: &str) -> Vec<Span<'static>> {
    let t = theme();
    let text_style = Style::default().fg(t.muted);
    let key_style = Style::default().fg(t.accent);

    let mut spans = Vec::new();
    let mut current = String::new();
    let mut in_bracket = false;

    for c in hints.chars() {
        match c {
            '[' => {
                if !current.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut current), text_style));
                }
                in_bracket = true;
                current.push(c);
            }
            ']' if in_bracket => {
                current.push(c);
                spans.push(Span::styled(std::mem::take(&mut current), key_style));
                in_bracket = false;
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        spans.push(Span::styled(current, text_style));
    }

    spans
}
