//! Display screen
//!
//! The committed number as a scaled block-glyph bitmap, the close control
//! and the tooltip line.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tridigit_app::{Showing, strings};

use crate::glyph::Bitmap;

const CLOSE_LABEL: &str = "[x]";
/// Terminal cells are roughly twice as tall as wide; a pixel is two cells.
const PIXEL_ON: &str = "██";
const PIXEL_OFF: &str = "  ";
const PIXEL_CELLS: usize = 2;

/// Top-right corner, one cell in from the edge.
pub(super) fn close_control_area(area: Rect) -> Rect {
    let width = (CLOSE_LABEL.len() as u16).min(area.width);
    Rect {
        x: area.right().saturating_sub(width + 1).max(area.x),
        y: area.y,
        width,
        height: area.height.min(1),
    }
}

/// Largest integer scale at which `bitmap` fits in `area`, at least 1.
fn fit_scale(bitmap: &Bitmap, area: Rect) -> usize {
    let cols = usize::from(area.width) / (bitmap.width() * PIXEL_CELLS).max(1);
    let rows = usize::from(area.height) / bitmap.height().max(1);
    cols.min(rows).max(1)
}

/// Center a `width` x `height` box in `area`, clamped to it.
fn centered(area: Rect, width: usize, height: usize) -> Rect {
    let width = (width as u16).min(area.width);
    let height = (height as u16).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the display screen.
pub fn render(frame: &mut Frame, showing: &Showing, area: Rect) {
    let body = Rect { height: area.height.saturating_sub(1), ..area };

    let bitmap = Bitmap::from_number(&showing.number).transformed(&showing.flags.transforms());
    let scale = fit_scale(&bitmap, body);
    let bitmap = bitmap.scaled(scale);

    let lines: Vec<Line> =
        bitmap.to_lines(PIXEL_ON, PIXEL_OFF).into_iter().map(Line::from).collect();
    let number = Paragraph::new(lines)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    frame.render_widget(number, centered(body, bitmap.width() * PIXEL_CELLS, bitmap.height()));

    let close = Paragraph::new(CLOSE_LABEL).style(Style::default().fg(Color::Yellow));
    frame.render_widget(close, close_control_area(area));

    let tooltip_area = Rect { y: area.bottom().saturating_sub(1), height: area.height.min(1), ..area };
    let tooltip = Paragraph::new(strings::TOOLTIP)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(tooltip, tooltip_area);
}

#[cfg(test)]
mod tests {
    use tridigit_app::DisplayNumber;

    use super::*;

    #[test]
    fn scale_fills_available_space() {
        let bitmap = Bitmap::from_number(&DisplayNumber::try_from("123").unwrap());
        // 11x5 pixels, 22 cells wide at scale 1.
        assert_eq!(fit_scale(&bitmap, Rect::new(0, 0, 80, 24)), 3);
        assert_eq!(fit_scale(&bitmap, Rect::new(0, 0, 10, 3)), 1);
    }

    #[test]
    fn close_control_in_top_right() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(close_control_area(area), Rect::new(36, 0, 3, 1));
    }
}
