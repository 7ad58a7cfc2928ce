//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: UI state machine
//! - [`Driver`]: Platform-specific I/O
//!
//! It also owns the display subscription. The subscription is acquired when
//! the App enters Display Mode and dropped when it leaves, when the loop
//! quits, or when the driver fails.

use tracing::debug;

use crate::{App, AppAction, AppEvent, DisplayConfig, Driver, EnvChange};

/// Generic runtime that orchestrates App and Driver.
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: App,
    subscription: Option<D::Subscription>,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime with the given driver and configuration.
    pub fn new(driver: D, config: DisplayConfig) -> Self {
        Self { driver, app: App::new(config), subscription: None }
    }

    /// Run the main event loop until the App asks to quit.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error. The display
    /// subscription is released before the error is returned.
    pub async fn run(mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;
        self.driver.focus_input();

        let result = loop {
            match self.step().await {
                Ok(true) => break Ok(()),
                Ok(false) => {},
                Err(e) => break Err(e),
            }
        };

        self.release();
        self.driver.stop();
        result
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver fails to poll, render or subscribe.
    pub async fn step(&mut self) -> Result<bool, D::Error> {
        let Some(event) = self.driver.poll_event().await? else {
            return Ok(false);
        };
        let actions = self.app.handle(event);
        self.process_actions(actions)
    }

    /// Execute actions returned by the App.
    ///
    /// Uses iterative processing so actions caused by the initial environment
    /// sample run in the same pass. Returns `true` if should quit.
    fn process_actions(&mut self, initial_actions: Vec<AppAction>) -> Result<bool, D::Error> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    AppAction::Render => self.driver.render(&self.app)?,
                    AppAction::FocusInput => self.driver.focus_input(),
                    AppAction::Quit => return Ok(true),
                    AppAction::StartDisplay { session } => {
                        self.release();
                        let period = self.app.config().mirror_interval;
                        self.subscription = Some(self.driver.subscribe(session, period)?);
                        debug!(%session, ?period, "acquired display subscription");

                        // Sample before any tick can be polled.
                        let sample = self.driver.sample();
                        let event = AppEvent::Environment { change: EnvChange::Initial, sample };
                        pending_actions.extend(self.app.handle(event));
                    },
                    AppAction::StopDisplay { session } => {
                        if self.subscription.take().is_some() {
                            debug!(%session, "released display subscription");
                        }
                    },
                }
            }
        }
        Ok(false)
    }

    fn release(&mut self) {
        if self.subscription.take().is_some() {
            debug!("released display subscription");
        }
    }

    /// Whether a display subscription is currently held.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a mutable reference to the Driver
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
