//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.
//!
//! The layout helpers are shared with the driver's mouse hit-testing so that
//! a click lands on exactly what was drawn.

mod display;
mod input;

use ratatui::{Frame, layout::Rect};
use tridigit_app::{App, Mode};

/// Driver-owned view state that is not part of the App.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    /// Input field has keyboard focus (cursor shown).
    pub focused: bool,
}

impl Default for View {
    fn default() -> Self {
        Self { focused: true }
    }
}

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, view: &View) {
    let area = frame.area();
    match app.mode() {
        Mode::Input(buffer) => input::render(frame, buffer.as_str(), view, area),
        Mode::Showing(showing) => display::render(frame, showing, area),
    }
}

/// Screen area of the clear control in Input Mode.
pub fn clear_control_area(area: Rect) -> Rect {
    input::layout(area).clear
}

/// Screen area of the close control in Display Mode.
pub fn close_control_area(area: Rect) -> Rect {
    display::close_control_area(area)
}
