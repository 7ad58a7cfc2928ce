//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the
//! interactive state of the widget completely decoupled from I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Validates edits to the input buffer and commits it once full.
//! - Owns the Input/Display mode switch and allocates display sessions.
//! - Applies mirror ticks and environment samples to the display flags.

use tracing::{debug, trace};

use crate::{
    AppAction, AppEvent, DisplayConfig, DisplayFlags, DisplayNumber, EnvChange, EnvSample,
    InputBuffer, KeyInput, Mode, SessionId, Showing, Transform,
};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Current render mode.
    mode: Mode,
    /// Last allocated display session.
    last_session: SessionId,
    /// Static display parameters.
    config: DisplayConfig,
}

impl App {
    /// Create a new App in Input Mode with an empty buffer.
    pub fn new(config: DisplayConfig) -> Self {
        Self { mode: Mode::default(), last_session: SessionId::default(), config }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Edit(value) => self.edit(&value),
            AppEvent::Clear => self.clear(),
            AppEvent::Dismiss => self.dismiss(),
            AppEvent::Close => self.close(),
            AppEvent::MirrorTick { session } => self.mirror_tick(session),
            AppEvent::Environment { change, sample } => self.environment(change, sample),
            AppEvent::Redraw => vec![AppAction::Render],
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        if key == KeyInput::Interrupt {
            return self.quit();
        }

        match &mut self.mode {
            Mode::Input(buffer) => match key {
                KeyInput::Char(c) => {
                    if !buffer.push(c) {
                        trace!(?c, "rejected keystroke");
                        return vec![];
                    }
                    self.commit_if_full()
                },
                KeyInput::Backspace => {
                    if buffer.pop().is_none() {
                        return vec![];
                    }
                    vec![AppAction::Render]
                },
                KeyInput::Esc => self.clear(),
                KeyInput::Enter | KeyInput::Interrupt => vec![],
            },
            Mode::Showing(_) => match key {
                KeyInput::Esc => self.close(),
                KeyInput::Enter | KeyInput::Char(' ') => self.dismiss(),
                KeyInput::Char(_) | KeyInput::Backspace | KeyInput::Interrupt => vec![],
            },
        }
    }

    /// Replace the whole input field with `value`.
    ///
    /// Rejected edits leave the buffer unchanged and produce no actions.
    /// Ignored in Display Mode.
    pub fn edit(&mut self, value: &str) -> Vec<AppAction> {
        let Mode::Input(buffer) = &mut self.mode else {
            return vec![];
        };
        if buffer.as_str() == value {
            return vec![];
        }
        if !buffer.replace(value) {
            trace!(value, "rejected edit");
            return vec![];
        }
        self.commit_if_full()
    }

    /// Empty the input buffer and refocus the field.
    pub fn clear(&mut self) -> Vec<AppAction> {
        match &mut self.mode {
            Mode::Input(buffer) => {
                buffer.clear();
                vec![AppAction::FocusInput, AppAction::Render]
            },
            Mode::Showing(_) => vec![],
        }
    }

    /// Tap on the displayed number.
    pub fn dismiss(&mut self) -> Vec<AppAction> {
        self.leave_display("tap")
    }

    /// Close control on the displayed number.
    pub fn close(&mut self) -> Vec<AppAction> {
        self.leave_display("close control")
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    fn commit_if_full(&mut self) -> Vec<AppAction> {
        let Mode::Input(buffer) = &self.mode else {
            return vec![];
        };
        if !buffer.is_full() {
            return vec![AppAction::Render];
        }

        let number = match DisplayNumber::try_from(buffer.as_str()) {
            Ok(number) => number,
            Err(e) => {
                // Unreachable while InputBuffer upholds its invariant.
                tracing::warn!("full buffer is not a valid number: {e}");
                return vec![AppAction::Render];
            },
        };

        let session = self.last_session.next();
        self.last_session = session;
        self.mode = Mode::Showing(Showing { number, flags: DisplayFlags::default(), session });
        debug!(%number, %session, "entered display mode");

        vec![AppAction::StartDisplay { session }, AppAction::Render]
    }

    fn leave_display(&mut self, trigger: &str) -> Vec<AppAction> {
        let Mode::Showing(showing) = &self.mode else {
            return vec![];
        };
        let session = showing.session;
        self.mode = Mode::Input(InputBuffer::new());
        debug!(%session, trigger, "left display mode");

        vec![AppAction::StopDisplay { session }, AppAction::FocusInput, AppAction::Render]
    }

    fn mirror_tick(&mut self, session: SessionId) -> Vec<AppAction> {
        match &mut self.mode {
            Mode::Showing(showing) if showing.session == session => {
                showing.flags = showing.flags.toggle_mirror();
                vec![AppAction::Render]
            },
            _ => {
                trace!(%session, "ignored stale mirror tick");
                vec![]
            },
        }
    }

    fn environment(&mut self, change: EnvChange, sample: EnvSample) -> Vec<AppAction> {
        let Mode::Showing(showing) = &mut self.mode else {
            return vec![];
        };
        showing.flags = showing.flags.with_sample(sample);
        trace!(?change, ?sample, flags = ?showing.flags, "environment sampled");
        vec![AppAction::Render]
    }

    /// Current render mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Input buffer contents. Empty in Display Mode.
    pub fn buffer(&self) -> &str {
        match &self.mode {
            Mode::Input(buffer) => buffer.as_str(),
            Mode::Showing(_) => "",
        }
    }

    /// Displayed number. `None` in Input Mode.
    pub fn displayed(&self) -> Option<DisplayNumber> {
        match &self.mode {
            Mode::Showing(showing) => Some(showing.number),
            Mode::Input(_) => None,
        }
    }

    /// Whether a number is displayed.
    pub fn is_showing(&self) -> bool {
        matches!(self.mode, Mode::Showing(_))
    }

    /// Display flags. All false in Input Mode.
    pub fn flags(&self) -> DisplayFlags {
        match &self.mode {
            Mode::Showing(showing) => showing.flags,
            Mode::Input(_) => DisplayFlags::default(),
        }
    }

    /// Active display session. `None` in Input Mode.
    pub fn session(&self) -> Option<SessionId> {
        match &self.mode {
            Mode::Showing(showing) => Some(showing.session),
            Mode::Input(_) => None,
        }
    }

    /// Active transforms in composition order.
    pub fn transforms(&self) -> Vec<Transform> {
        self.flags().transforms()
    }

    /// Static display parameters.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Viewport;

    fn type_digits(app: &mut App, digits: &str) -> Vec<AppAction> {
        digits.chars().flat_map(|c| app.handle(AppEvent::Key(KeyInput::Char(c)))).collect()
    }

    fn showing_app(digits: &str) -> App {
        let mut app = App::default();
        let _ = type_digits(&mut app, digits);
        app
    }

    #[test]
    fn third_digit_enters_display() {
        let mut app = App::default();
        let actions = type_digits(&mut app, "129");

        assert!(matches!(actions.as_slice(), [
            AppAction::Render,
            AppAction::Render,
            AppAction::StartDisplay { session: SessionId(1) },
            AppAction::Render
        ]));
        assert_eq!(app.displayed().map(|n| n.to_string()), Some("129".to_string()));
        assert_eq!(app.buffer(), "");
    }

    #[test]
    fn rejected_keystroke_produces_no_actions() {
        let mut app = App::default();
        let _ = type_digits(&mut app, "4");

        let actions = app.handle(AppEvent::Key(KeyInput::Char('x')));
        assert!(actions.is_empty());
        assert_eq!(app.buffer(), "4");
    }

    #[test]
    fn edit_commits_whole_value() {
        let mut app = App::default();
        let actions = app.edit("500");

        assert!(matches!(actions.as_slice(), [AppAction::StartDisplay { .. }, AppAction::Render]));
        assert!(app.is_showing());
    }

    #[test]
    fn edit_ignored_while_showing() {
        let mut app = showing_app("123");
        assert!(app.edit("4").is_empty());
        assert_eq!(app.displayed().map(|n| n.to_string()), Some("123".to_string()));
    }

    #[test]
    fn clear_refocuses_input() {
        let mut app = App::default();
        let _ = type_digits(&mut app, "12");

        let actions = app.clear();
        assert!(matches!(actions.as_slice(), [AppAction::FocusInput, AppAction::Render]));
        assert_eq!(app.buffer(), "");
    }

    #[test]
    fn backspace_removes_last_digit() {
        let mut app = App::default();
        let _ = type_digits(&mut app, "12");

        let _ = app.handle(AppEvent::Key(KeyInput::Backspace));
        assert_eq!(app.buffer(), "1");
    }

    #[test]
    fn close_stops_session_and_resets() {
        let mut app = showing_app("129");
        let _ = app.handle(AppEvent::MirrorTick { session: SessionId(1) });
        assert!(app.flags().mirrored);

        let actions = app.close();
        assert!(matches!(actions.as_slice(), [
            AppAction::StopDisplay { session: SessionId(1) },
            AppAction::FocusInput,
            AppAction::Render
        ]));
        assert!(app.flags().is_cleared());
        assert_eq!(app.buffer(), "");
    }

    #[test]
    fn dismiss_in_input_mode_is_noop() {
        let mut app = App::default();
        assert!(app.dismiss().is_empty());
        assert!(app.close().is_empty());
    }

    #[test]
    fn sessions_increase_per_display() {
        let mut app = showing_app("111");
        let _ = app.dismiss();
        let _ = type_digits(&mut app, "222");

        assert_eq!(app.session(), Some(SessionId(2)));
    }

    #[test]
    fn stale_tick_is_ignored() {
        let mut app = showing_app("111");
        let _ = app.dismiss();
        let _ = type_digits(&mut app, "222");

        assert!(app.handle(AppEvent::MirrorTick { session: SessionId(1) }).is_empty());
        assert!(!app.flags().mirrored);
    }

    #[test]
    fn environment_ignored_in_input_mode() {
        let mut app = App::default();
        let sample = EnvSample::new(180, Viewport::new(300.0, 600.0));
        let actions = app.handle(AppEvent::Environment { change: EnvChange::Resize, sample });

        assert!(actions.is_empty());
        assert!(app.flags().is_cleared());
    }

    #[test]
    fn resize_always_renders_while_showing() {
        let mut app = showing_app("500");
        let sample = EnvSample::new(0, Viewport::new(800.0, 600.0));

        let initial = app.handle(AppEvent::Environment { change: EnvChange::Initial, sample });
        assert_eq!(initial, vec![AppAction::Render]);

        // Same flags, but the surface changed size.
        let resize = app.handle(AppEvent::Environment { change: EnvChange::Resize, sample });
        assert_eq!(resize, vec![AppAction::Render]);
        assert!(app.flags().is_cleared());
    }

    #[test]
    fn keys_in_display_mode() {
        let mut app = showing_app("321");
        assert!(app.handle(AppEvent::Key(KeyInput::Char('5'))).is_empty());
        assert!(app.is_showing());

        let _ = app.handle(AppEvent::Key(KeyInput::Enter));
        assert!(!app.is_showing());
    }

    #[test]
    fn interrupt_quits_in_any_mode() {
        let mut app = App::default();
        assert_eq!(app.handle(AppEvent::Key(KeyInput::Interrupt)), vec![AppAction::Quit]);

        let mut app = showing_app("999");
        assert_eq!(app.handle(AppEvent::Key(KeyInput::Interrupt)), vec![AppAction::Quit]);
    }
}
