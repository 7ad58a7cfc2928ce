//! Terminal UI for tridigit
//!
//! A thin shell over [`tridigit_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`tridigit_app::Runtime`].
//!
//! This crate only handles terminal events, the mirror timer task and
//! rendering the number as block glyphs.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod glyph;
pub mod terminal;
pub mod ticker;
pub mod ui;

pub use terminal::{TerminalConfig, TerminalDriver, TerminalError, TerminalSubscription};
pub use tridigit_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
