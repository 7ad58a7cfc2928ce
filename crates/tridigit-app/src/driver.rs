//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::{future::Future, time::Duration};

use crate::{App, AppEvent, EnvSample, SessionId};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in production and in tests.
///
/// # Implementations
///
/// - **TUI**: crossterm events, a tokio task for the mirror timer
/// - **Tests**: scripted events and recorded renders
///
/// The browser front end is callback driven and holds its subscription
/// directly instead of going through a [`Runtime`](crate::Runtime).
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Guard for one display session's timer and environment listeners.
    ///
    /// Dropping the guard must stop the timer and remove the listeners.
    type Subscription: Send;

    /// Poll for the next input event.
    ///
    /// Returns the next event or `None` if no event is ready.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Start the mirror timer and environment listeners for `session`.
    ///
    /// The timer must deliver [`AppEvent::MirrorTick`] for `session` once
    /// per `period`, the first one a full period after this call.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer or a listener cannot be installed.
    fn subscribe(
        &mut self,
        session: SessionId,
        period: Duration,
    ) -> Result<Self::Subscription, Self::Error>;

    /// Read orientation and viewport right now.
    fn sample(&self) -> EnvSample;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Move keyboard focus to the input field.
    fn focus_input(&mut self);

    /// Release platform resources before the runtime exits.
    fn stop(&mut self);
}
