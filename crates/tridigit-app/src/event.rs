//! Application input events.
//!
//! This module defines [`AppEvent`], the full set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from three sources:
//! - User interactions (keys, field edits, taps).
//! - The mirror timer owned by the display subscription.
//! - Orientation and resize notifications, delivered as [`EnvSample`]s.

use crate::{EnvChange, EnvSample, KeyInput, SessionId};

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// The text field was edited; carries the proposed new value.
    Edit(String),

    /// The clear control was activated.
    Clear,

    /// Tap anywhere on the displayed number.
    Dismiss,

    /// The dedicated close control was activated.
    Close,

    /// Mirror timer fired.
    MirrorTick {
        /// Session whose timer fired.
        session: SessionId,
    },

    /// Orientation or viewport sample.
    Environment {
        /// What prompted the sample.
        change: EnvChange,
        /// The sample itself.
        sample: EnvSample,
    },

    /// The surface needs repainting (e.g. terminal resized in Input Mode).
    Redraw,
}
