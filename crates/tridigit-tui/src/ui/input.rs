//! Input screen
//!
//! Title, the three-digit field with its cursor, and the clear control.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tridigit_app::strings;

use super::View;

const CLEAR_LABEL: &str = "[clear]";
const FIELD_WIDTH: u16 = 9; // 3 digits plus padding inside the border
const FIELD_HEIGHT: u16 = 3;
const GAP: u16 = 1;
const HINT: &str = "0-9 type | Backspace delete | Esc clear | Ctrl-C quit";

/// Areas of the input screen.
pub(super) struct InputLayout {
    pub title: Rect,
    pub field: Rect,
    pub clear: Rect,
}

/// Compute the input screen layout for `area`.
pub(super) fn layout(area: Rect) -> InputLayout {
    let [title, _, row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(GAP),
        Constraint::Length(FIELD_HEIGHT),
    ])
    .flex(Flex::Center)
    .areas(area);

    let [field, _, clear_column] = Layout::horizontal([
        Constraint::Length(FIELD_WIDTH),
        Constraint::Length(GAP),
        Constraint::Length(CLEAR_LABEL.len() as u16),
    ])
    .flex(Flex::Center)
    .areas(row);

    // Clear control sits on the field's text line.
    let clear = Rect {
        y: clear_column.y.saturating_add(clear_column.height / 2),
        height: clear_column.height.min(1),
        ..clear_column
    };

    InputLayout { title, field, clear }
}

/// Render the input screen.
pub fn render(frame: &mut Frame, buffer: &str, view: &View, area: Rect) {
    let areas = layout(area);

    let title = Paragraph::new(strings::TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    frame.render_widget(title, areas.title);

    let content = if buffer.is_empty() {
        Span::styled(strings::PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(buffer, Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
    };
    let field = Paragraph::new(Line::from(vec![Span::raw(" "), content]))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(field, areas.field);

    let clear = Paragraph::new(CLEAR_LABEL).style(Style::default().fg(Color::Yellow));
    frame.render_widget(clear, areas.clear);

    if area.height > FIELD_HEIGHT + GAP + 2 {
        let hint_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        let hint = Paragraph::new(HINT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, hint_area);
    }

    if view.focused {
        // Inside the left border, after the one-cell padding.
        let cursor_x = areas.field.x.saturating_add(2).saturating_add(buffer.len() as u16);
        let cursor_y = areas.field.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}
