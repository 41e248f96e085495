//! Rendering of a `DataTable`.
//!
//! The table is drawn with ratatui's `Table` using fixed column widths
//! computed up front, so the same rectangles can position the inline
//! editors of the row being edited.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::components::skeleton_bar;
use super::theme::theme;
use crate::table::{
    ColumnDef, DataTable, Record, RowActions, RowMode, RowView, TableBody, ACTIONS_COLUMN_HEADER,
};

/// Text of the single row shown for an empty collection.
pub const NO_DATA_TEXT: &str = "No data";

const HEADER_HEIGHT: u16 = 1;

/// Split `area` into one rectangle per column.
///
/// The actions column is sized to its widest label first. Columns with a
/// width take that percentage of what remains; the rest share the leftover.
pub fn column_areas(area: Rect, columns: &[ColumnDef], actions: RowActions) -> Vec<Rect> {
    let (data, actions_area) = match columns.split_last() {
        Some((last, data)) if last.is_actions() => {
            let width = actions_width(actions).min(area.width);
            let [data_area, actions_area] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Length(width)])
                    .spacing(1)
                    .areas(area);
            ((data, data_area), Some(actions_area))
        }
        _ => ((columns, area), None),
    };
    let (data_columns, data_area) = data;

    let constraints: Vec<Constraint> = data_columns
        .iter()
        .map(|column| match column.width {
            Some(percent) => Constraint::Percentage(percent),
            None => Constraint::Fill(1),
        })
        .collect();

    let mut areas = Layout::horizontal(constraints)
        .spacing(1)
        .flex(Flex::Start)
        .split(data_area)
        .to_vec();
    areas.extend(actions_area);
    areas
}

/// Width of the widest actions cell over every row mode.
fn actions_width(actions: RowActions) -> u16 {
    let widest = [RowMode::Viewing, RowMode::Editing, RowMode::Saving]
        .into_iter()
        .map(|mode| actions.cell_text(mode).chars().count())
        .chain(std::iter::once(ACTIONS_COLUMN_HEADER.chars().count()))
        .max()
        .unwrap_or_default();
    u16::try_from(widest).unwrap_or(u16::MAX)
}

/// The "Page X of Y" caption. An empty collection still shows one page.
pub fn page_caption<R: Record>(table: &DataTable<R>) -> String {
    let pagination = table.pagination();
    format!(
        "Page {} of {}",
        pagination.current_page(),
        pagination.total_pages().max(1)
    )
}

/// Draw the table, its footer and any open popup into `area`.
pub fn render_table<R: Record>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    table: &DataTable<R>,
    records: &[R],
) {
    let t = theme();

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(t.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let error = table.session().and_then(|s| s.error());
    let [body_area, error_area, footer_area] = Layout::vertical([
        Constraint::Min(HEADER_HEIGHT + 1),
        Constraint::Length(u16::from(error.is_some())),
        Constraint::Length(u16::from(table.is_paginated())),
    ])
    .areas(inner);

    let columns = column_areas(body_area, table.columns(), table.actions());
    let body = table.body(records);
    render_body(frame, body_area, table, &columns, &body);

    if let Some(message) = error {
        let line = Line::from(vec![
            Span::styled("✗ ", Style::default().fg(t.error)),
            Span::styled(message.to_string(), Style::default().fg(t.error)),
        ]);
        frame.render_widget(Paragraph::new(line), error_area);
    }

    if table.is_paginated() {
        render_footer(frame, footer_area, table);
    }

    if let Some(dialog) = table.confirm_dialog() {
        let screen = frame.area();
        dialog.render(frame, screen);
    }
}

fn render_body<R: Record>(
    frame: &mut Frame,
    area: Rect,
    table: &DataTable<R>,
    columns: &[Rect],
    body: &TableBody<R::Id>,
) {
    let t = theme();
    let widths: Vec<Constraint> = columns.iter().map(|r| Constraint::Length(r.width)).collect();
    let header = Row::new(
        table
            .columns()
            .iter()
            .map(|column| Cell::from(column.header.clone())),
    )
    .style(
        Style::default()
            .fg(t.header)
            .add_modifier(Modifier::BOLD),
    )
    .height(HEADER_HEIGHT);

    let visible = area.height.saturating_sub(HEADER_HEIGHT) as usize;

    let rows: Vec<Row> = match body {
        TableBody::Skeleton { rows, columns: count } => (0..*rows)
            .take(visible)
            .map(|row| {
                Row::new((0..*count).map(|column| {
                    let width = columns.get(column).map_or(1, |r| r.width as usize);
                    Cell::from(skeleton_bar(row, column, width))
                }))
            })
            .collect(),
        TableBody::Empty { .. } => Vec::new(),
        TableBody::Rows(views) => {
            let offset = scroll_offset(table.cursor(), visible);
            views
                .iter()
                .enumerate()
                .skip(offset)
                .take(visible)
                .map(|(index, view)| styled_row(table, view, index == table.cursor()))
                .collect()
        }
    };

    let widget = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .flex(Flex::Start);
    frame.render_widget(widget, area);

    match body {
        TableBody::Empty { .. } if area.height > HEADER_HEIGHT => {
            let row_area = Rect::new(area.x, area.y + HEADER_HEIGHT, area.width, 1);
            let no_data = Paragraph::new(NO_DATA_TEXT)
                .style(Style::default().fg(t.muted))
                .alignment(Alignment::Center);
            frame.render_widget(no_data, row_area);
        }
        TableBody::Rows(views) => {
            let offset = scroll_offset(table.cursor(), visible);
            let editing = views
                .iter()
                .enumerate()
                .skip(offset)
                .take(visible)
                .find(|(_, view)| view.mode == RowMode::Editing);
            if let Some((index, _)) = editing {
                let y = area.y + HEADER_HEIGHT + (index - offset) as u16;
                render_editors(frame, table, columns, y);
            }
        }
        TableBody::Skeleton { .. } | TableBody::Empty { .. } => {}
    }
}

fn scroll_offset(cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    cursor.saturating_sub(visible - 1)
}

fn styled_row<'a, R: Record>(
    table: &DataTable<R>,
    view: &'a RowView<R::Id>,
    selected: bool,
) -> Row<'a> {
    let t = theme();
    let session = table.session().filter(|_| view.mode == RowMode::Editing);

    let cells = view.cells.iter().enumerate().map(|(column, text)| {
        let def = &table.columns()[column];
        if def.is_actions() {
            let color = match view.mode {
                RowMode::Viewing => t.muted,
                RowMode::Editing => t.success,
                RowMode::Saving => t.warning,
            };
            return Cell::from(Span::styled(text.as_str(), Style::default().fg(color)));
        }
        // The editor is drawn on top of this cell.
        if session.is_some_and(|s| s.editor_for(column).is_some()) {
            return Cell::from("");
        }
        Cell::from(text.as_str())
    });

    let mut style = Style::default().fg(t.fg);
    match view.mode {
        RowMode::Editing => style = style.bg(t.row_editing),
        RowMode::Saving => style = style.bg(t.row_editing).add_modifier(Modifier::DIM),
        RowMode::Viewing if selected => style = style.bg(t.row_highlight),
        RowMode::Viewing => {}
    }

    Row::new(cells).style(style)
}

fn render_editors<R: Record>(frame: &mut Frame, table: &DataTable<R>, columns: &[Rect], y: u16) {
    let Some(session) = table.session() else {
        return;
    };
    let focused = session.focused_column();

    for field in session.editors() {
        let Some(column) = columns.get(field.column) else {
            continue;
        };
        let cell = Rect::new(column.x, y, column.width, 1);
        field.editor.render(frame, cell, focused == Some(field.column));
    }

    // Popups last so they sit above the other editors.
    if let Some(field) = session.editors().iter().find(|f| Some(f.column) == focused) {
        if let Some(column) = columns.get(field.column) {
            let anchor = Rect::new(column.x, y, column.width, 1);
            let screen = frame.area();
            field.editor.render_overlay(frame, anchor, screen);
        }
    }
}

fn render_footer<R: Record>(frame: &mut Frame, area: Rect, table: &DataTable<R>) {
    let t = theme();
    let pagination = table.pagination();

    let nav = |label: &str, enabled: bool| {
        let color = if enabled { t.accent } else { t.muted };
        Span::styled(label.to_string(), Style::default().fg(color))
    };

    let line = Line::from(vec![
        nav("‹ prev", pagination.has_prev()),
        Span::raw("  "),
        Span::styled(page_caption(table), Style::default().fg(t.fg)),
        Span::raw("  "),
        nav("next ›", pagination.has_next()),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}
