//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard, mouse and resize events and ratatui for rendering. The mirror
//! timer runs as a tokio task feeding the same event loop.
//!
//! Terminals report no device orientation, so the driver simulates one: it
//! starts at the configured angle and the `o` key turns the simulated device
//! by half a turn while a display subscription is active.

use std::{
    io::{self, Stdout, stdout},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use crossterm::{
    ExecutableCommand,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Position, Rect},
};
use thiserror::Error;
use tokio::sync::mpsc;
use tridigit_app::{App, AppEvent, Driver, EnvChange, EnvSample, KeyInput, SessionId, Viewport};

use crate::{
    ticker::MirrorTicker,
    ui::{self, View},
};

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Log file could not be opened.
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        /// Path given on the command line.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Terminal-specific settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalConfig {
    /// Simulated orientation angle at startup, in degrees.
    pub initial_angle: i32,
    /// Height of a terminal cell divided by its width.
    pub cell_aspect: f64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self { initial_angle: 0, cell_aspect: 2.0 }
    }
}

impl TerminalConfig {
    /// Viewport for a terminal of `cols` x `rows` cells.
    pub fn viewport(&self, cols: u16, rows: u16) -> Viewport {
        Viewport::new(f64::from(cols), f64::from(rows) * self.cell_aspect)
    }
}

/// Display subscription for one session.
///
/// Owns the mirror timer and marks the environment listeners active.
/// Dropping it stops the timer and silences orientation and resize
/// notifications.
#[derive(Debug)]
pub struct TerminalSubscription {
    _ticker: MirrorTicker,
    listening: Arc<AtomicBool>,
}

impl Drop for TerminalSubscription {
    fn drop(&mut self) {
        self.listening.store(false, Ordering::SeqCst);
    }
}

/// Terminal driver implementing the [`Driver`] trait.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    ticks_tx: mpsc::UnboundedSender<AppEvent>,
    ticks_rx: mpsc::UnboundedReceiver<AppEvent>,
    listening: Arc<AtomicBool>,
    config: TerminalConfig,
    angle: i32,
    size: (u16, u16),
    view: View,
}

impl TerminalDriver {
    /// Create a new terminal driver and take over the terminal.
    pub fn new(config: TerminalConfig) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        stdout().execute(EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let size = crossterm::terminal::size()?;
        let (ticks_tx, ticks_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            event_stream: EventStream::new(),
            ticks_tx,
            ticks_rx,
            listening: Arc::new(AtomicBool::new(false)),
            config,
            angle: config.initial_angle.rem_euclid(360),
            size,
            view: View::default(),
        })
    }

    fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    fn environment(&self, change: EnvChange) -> AppEvent {
        AppEvent::Environment { change, sample: self.sample() }
    }

    fn translate(&mut self, event: Event) -> Option<AppEvent> {
        let listening = self.is_listening();
        match event {
            Event::Key(key) => match map_key(key, listening)? {
                KeyMapping::Key(input) => Some(AppEvent::Key(input)),
                KeyMapping::Rotate => {
                    self.angle = half_turn(self.angle);
                    tracing::debug!(angle = self.angle, "simulated orientation change");
                    Some(self.environment(EnvChange::Orientation))
                },
            },
            Event::Mouse(mouse) => {
                let area = Rect::new(0, 0, self.size.0, self.size.1);
                map_mouse(area, listening, mouse)
            },
            Event::Resize(cols, rows) => {
                self.size = (cols, rows);
                Some(resize_event(listening, self.sample()))
            },
            _ => None,
        }
    }
}

/// What a key press means to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyMapping {
    /// Forwarded to the app.
    Key(KeyInput),
    /// Turn the simulated device.
    Rotate,
}

/// Convert crossterm `KeyCode` to `KeyInput`.
fn convert_key(code: KeyCode) -> Option<KeyInput> {
    match code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Esc => Some(KeyInput::Esc),
        _ => None,
    }
}

/// Map a key press. `o` rotates only while a subscription is listening.
fn map_key(key: KeyEvent, listening: bool) -> Option<KeyMapping> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyMapping::Key(KeyInput::Interrupt));
    }
    if listening && matches!(key.code, KeyCode::Char('o' | 'O')) {
        return Some(KeyMapping::Rotate);
    }
    convert_key(key.code).map(KeyMapping::Key)
}

/// Map a left click inside a terminal of size `area`.
///
/// While listening a click on the close control closes and nowhere else
/// dismisses; the two never both fire. Otherwise only the clear control
/// reacts.
fn map_mouse(area: Rect, listening: bool, mouse: MouseEvent) -> Option<AppEvent> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let position = Position::new(mouse.column, mouse.row);

    if listening {
        if ui::close_control_area(area).contains(position) {
            Some(AppEvent::Close)
        } else {
            Some(AppEvent::Dismiss)
        }
    } else if ui::clear_control_area(area).contains(position) {
        Some(AppEvent::Clear)
    } else {
        None
    }
}

/// A resize re-samples the environment while listening, otherwise it only
/// repaints.
fn resize_event(listening: bool, sample: EnvSample) -> AppEvent {
    if listening {
        AppEvent::Environment { change: EnvChange::Resize, sample }
    } else {
        AppEvent::Redraw
    }
}

/// Simulated orientation after half a turn, in `0..360`.
fn half_turn(angle: i32) -> i32 {
    (angle.rem_euclid(360) + 180) % 360
}

impl Driver for TerminalDriver {
    type Error = TerminalError;
    type Subscription = TerminalSubscription;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => Ok(self.translate(event)),
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    None => Ok(Some(AppEvent::Key(KeyInput::Interrupt))),
                }
            }

            // Mirror ticks
            Some(event) = self.ticks_rx.recv() => Ok(Some(event)),
        }
    }

    fn subscribe(
        &mut self,
        session: SessionId,
        period: Duration,
    ) -> Result<Self::Subscription, Self::Error> {
        self.view.focused = false;
        self.listening.store(true, Ordering::SeqCst);
        let ticker = MirrorTicker::spawn(session, period, self.ticks_tx.clone());
        Ok(TerminalSubscription { _ticker: ticker, listening: Arc::clone(&self.listening) })
    }

    fn sample(&self) -> EnvSample {
        let (cols, rows) = self.size;
        EnvSample::new(self.angle, self.config.viewport(cols, rows))
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        let view = self.view;
        let completed = self.terminal.draw(|frame| {
            ui::render(frame, app, &view);
        })?;
        self.size = (completed.area.width, completed.area.height);
        Ok(())
    }

    fn focus_input(&mut self) {
        self.view.focused = true;
    }

    fn stop(&mut self) {
        self.listening.store(false, Ordering::SeqCst);
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
        let _ = stdout().execute(DisableMouseCapture);
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
