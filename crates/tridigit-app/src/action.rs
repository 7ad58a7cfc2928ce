//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use crate::SessionId;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Move keyboard focus to the input field.
    FocusInput,

    /// Display Mode entered: start the mirror timer and environment
    /// listeners, then sample the environment.
    StartDisplay {
        /// Session that was entered.
        session: SessionId,
    },

    /// Display Mode left: release the timer and listeners.
    StopDisplay {
        /// Session that ended.
        session: SessionId,
    },

    /// Quit the application.
    Quit,
}
